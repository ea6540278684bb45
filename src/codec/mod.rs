//! Image decode/encode capability.
//!
//! The conversion pipeline relies only on the [`ImageCodec`] contract below.
//! The shipped backend lives in [`image_rs`] and wraps the `image` crate;
//! another backend would wrap another codec library behind the same trait.

pub mod image_rs;

pub use self::image_rs::ImageRsCodec;

use crate::format::OutputFormat;
use crate::image::ImageRgba8;
use thiserror::Error;

/// Codec-level failure, independent of any particular backend.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The byte stream is not a parsable image.
    #[error("unrecognized or corrupt image data: {0}")]
    Parse(String),

    /// The encoder rejected the image or failed mid-stream.
    #[error("encoder failure: {0}")]
    Encode(String),

    /// An I/O error surfaced inside the codec.
    #[error("codec I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend has no encoder for the requested format.
    #[error("no encoder available for {0} output")]
    Unsupported(OutputFormat),
}

/// Encoder configuration passed through to the backend.
///
/// No options are recognized today; the argument exists because encoder back
/// ends generally require one.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeOptions {}

/// Decode/encode contract between the pipeline and a codec backend.
pub trait ImageCodec {
    /// Decode raw file bytes into an RGBA pixel grid.
    fn decode(&self, bytes: &[u8]) -> Result<ImageRgba8, CodecError>;

    /// Encode a pixel grid into the byte representation of `format`.
    fn encode(
        &self,
        image: &ImageRgba8,
        format: OutputFormat,
        options: &EncodeOptions,
    ) -> Result<Vec<u8>, CodecError>;
}
