#![doc = include_str!("../README.md")]

pub mod cli;
pub mod codec;
pub mod convert;
pub mod error;
pub mod format;
pub mod greyscale;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry point: the one-shot conversion pipeline.
pub use crate::convert::convert;

// The pieces the pipeline is built from.
pub use crate::codec::{CodecError, EncodeOptions, ImageCodec, ImageRsCodec};
pub use crate::error::ConvertError;
pub use crate::format::OutputFormat;
pub use crate::greyscale::convert_to_greyscale;
pub use crate::image::ImageRgba8;
