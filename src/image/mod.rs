pub mod rgba;

pub use self::rgba::ImageRgba8;
