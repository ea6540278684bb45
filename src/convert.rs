//! The conversion pipeline: validate, decode, transform, resolve, encode,
//! write. One conversion attempt per call; the first failure is terminal.

use crate::codec::{EncodeOptions, ImageCodec};
use crate::error::ConvertError;
use crate::format::OutputFormat;
use crate::greyscale::convert_to_greyscale;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Runs one conversion: reads `input`, averages its channels, encodes for
/// the format named by `output`'s suffix and writes the result.
///
/// Refuses to touch the filesystem if a file already exists at `output`.
/// Every failure carries the path involved.
pub fn convert(input: &Path, output: &Path, codec: &dyn ImageCodec) -> Result<(), ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    let bytes = fs::read(input).map_err(|e| read_error(input, e))?;
    debug!("read {} bytes from {}", bytes.len(), input.display());

    let mut image = codec.decode(&bytes).map_err(|source| ConvertError::Decode {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("decoded {}x{} pixels", image.w, image.h);

    convert_to_greyscale(&mut image);

    let format = OutputFormat::from_path(output)?;
    debug!("resolved {format} output for {}", output.display());

    let encoded = codec
        .encode(&image, format, &EncodeOptions::default())
        .map_err(|source| ConvertError::Encode {
            path: output.to_path_buf(),
            source,
        })?;

    if output.exists() {
        return Err(ConvertError::OutputExists {
            path: output.to_path_buf(),
        });
    }
    fs::write(output, &encoded).map_err(|source| ConvertError::OutputIo {
        path: output.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", encoded.len(), output.display());
    Ok(())
}

fn read_error(path: &Path, source: io::Error) -> ConvertError {
    match source.kind() {
        io::ErrorKind::PermissionDenied => ConvertError::InputNotReadable {
            path: path.to_path_buf(),
        },
        // The existence check above can race with deletion.
        io::ErrorKind::NotFound => ConvertError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::InputIo {
            path: path.to_path_buf(),
            source,
        },
    }
}
