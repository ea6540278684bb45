//! `image`-crate backend for the codec capability.

use super::{CodecError, EncodeOptions, ImageCodec};
use crate::format::OutputFormat;
use crate::image::ImageRgba8;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Codec backed by the pure-Rust `image` crate.
///
/// Decoding sniffs the format from the byte stream, so any input format the
/// `image` crate reads is accepted regardless of the input path's suffix.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageRsCodec;

impl ImageRsCodec {
    /// Formats this backend can encode. The suffix table accepts a wider set;
    /// requests outside this mapping fail with [`CodecError::Unsupported`].
    fn encoder_format(format: OutputFormat) -> Option<ImageFormat> {
        match format {
            OutputFormat::Bmp => Some(ImageFormat::Bmp),
            OutputFormat::Ico => Some(ImageFormat::Ico),
            OutputFormat::Gif => Some(ImageFormat::Gif),
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Tiff => Some(ImageFormat::Tiff),
            OutputFormat::Pcx
            | OutputFormat::Dcx
            | OutputFormat::Wbmp
            | OutputFormat::Xbm
            | OutputFormat::Xpm => None,
        }
    }
}

impl ImageCodec for ImageRsCodec {
    fn decode(&self, bytes: &[u8]) -> Result<ImageRgba8, CodecError> {
        let decoded = image::load_from_memory(bytes).map_err(|e| match e {
            image::ImageError::IoError(io) => CodecError::Io(io),
            other => CodecError::Parse(other.to_string()),
        })?;
        let rgba = decoded.into_rgba8();
        let (w, h) = rgba.dimensions();
        ImageRgba8::from_raw(w as usize, h as usize, rgba.into_raw())
            .ok_or_else(|| CodecError::Parse("decoded buffer size mismatch".to_string()))
    }

    fn encode(
        &self,
        image: &ImageRgba8,
        format: OutputFormat,
        _options: &EncodeOptions,
    ) -> Result<Vec<u8>, CodecError> {
        let target = Self::encoder_format(format).ok_or(CodecError::Unsupported(format))?;
        let buffer = RgbaImage::from_raw(image.w as u32, image.h as u32, image.data.clone())
            .ok_or_else(|| CodecError::Encode("pixel buffer size mismatch".to_string()))?;
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(buffer)
            .write_to(&mut out, target)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => CodecError::Io(io),
                other => CodecError::Encode(other.to_string()),
            })?;
        Ok(out.into_inner())
    }
}
