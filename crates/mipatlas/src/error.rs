//! Error types for mip atlas building.

use std::path::PathBuf;

use image::{ColorType, ImageError};
use thiserror::Error;

/// Errors that can occur while building a mip atlas.
#[derive(Debug, Error)]
pub enum Error {
    /// No input path was given at all.
    #[error("no input image given")]
    MissingInput,

    /// The input path does not exist.
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input path exists but is not a regular file.
    #[error("input is not a file: {}", .0.display())]
    InputNotAFile(PathBuf),

    /// The input path could not be inspected.
    #[error("cannot access input {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file name cannot be turned into an output name.
    #[error("invalid input file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    /// The input could not be decoded as a raster image.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// The atlas could not be encoded or written.
    #[error("failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// A resampled level came back in a different pixel format than the canvas.
    #[error("pixel format mismatch: canvas is {expected:?}, level is {actual:?}")]
    PixelFormatMismatch { expected: ColorType, actual: ColorType },
}

impl Error {
    /// Whether this error came from validating the input path, before any
    /// decoding was attempted.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::MissingInput
                | Error::InputNotFound(_)
                | Error::InputNotAFile(_)
                | Error::InputUnreadable { .. }
                | Error::InvalidFileName(_)
        )
    }
}

/// Result type for mip atlas operations.
pub type Result<T> = std::result::Result<T, Error>;
