//! Error types for colorcut-io

use thiserror::Error;

/// Errors that can occur while reading or sampling images
#[derive(Debug, Error)]
pub enum IoError {
    /// Image could not be opened or decoded
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameter(String),
}

/// Result type for image I/O operations
pub type IoResult<T> = Result<T, IoError>;
