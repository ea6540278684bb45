//! Crate-wide error taxonomy.
//!
//! Every failure travels up to the binary's `main` as a tagged value; nothing
//! below it prints or exits. Each variant's `Display` output is the single
//! diagnostic line shown to the user, naming the path involved.

use crate::codec::CodecError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not exist.
    #[error("File at '{}' does not exist.", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input path exists but cannot be opened for reading.
    #[error("File at '{}' cannot be read.", .path.display())]
    InputNotReadable { path: PathBuf },

    /// Reading the input failed below the codec layer.
    #[error("An I/O error occurred while reading '{}': {source}", .path.display())]
    InputIo { path: PathBuf, source: io::Error },

    /// The codec rejected the input bytes.
    #[error("The file '{}' can't be parsed. Try a different image format.", .path.display())]
    Decode { path: PathBuf, source: CodecError },

    /// The output suffix is outside the supported set.
    #[error("The format '{}' is not supported. Try a different format.", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The codec failed to produce bytes for the resolved format.
    #[error("Failed to encode '{}': {source}", .path.display())]
    Encode { path: PathBuf, source: CodecError },

    /// A file is already present at the output path.
    #[error("A file already exists at '{}'.", .path.display())]
    OutputExists { path: PathBuf },

    /// Writing the encoded bytes failed.
    #[error("Failed to write '{}': {source}", .path.display())]
    OutputIo { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn diagnostics_name_the_path() {
        let err = ConvertError::InputNotFound {
            path: Path::new("photo.png").to_path_buf(),
        };
        assert_eq!(err.to_string(), "File at 'photo.png' does not exist.");

        let err = ConvertError::OutputExists {
            path: Path::new("existing.png").to_path_buf(),
        };
        assert_eq!(err.to_string(), "A file already exists at 'existing.png'.");
    }
}
