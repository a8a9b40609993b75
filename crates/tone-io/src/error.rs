//! Error types for the image adapter.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for adapter operations.
///
/// The pixel pipeline itself is total and never fails; everything that
/// can go wrong lives at this boundary - decoding, encoding, and
/// parameter files.
#[derive(Error, Debug)]
pub enum IoError {
    /// The image could not be decoded or encoded.
    #[error("image codec failure: {0}")]
    Image(#[from] image::ImageError),

    /// A file could not be read or written.
    #[error("i/o failure on {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A parameter file did not parse as JSON.
    #[error("invalid parameter file: {0}")]
    Params(#[from] serde_json::Error),
}

/// Result type for adapter operations.
pub type IoResult<T> = Result<T, IoError>;
