//! Error type for palette extraction

use colorcut_io::IoError;
use colorcut_quant::QuantError;
use thiserror::Error;

/// Errors from any stage of palette extraction
#[derive(Debug, Error)]
pub enum Error {
    /// Decoding or sampling failed
    #[error("io error: {0}")]
    Io(#[from] IoError),

    /// Quantization failed
    #[error("quantization error: {0}")]
    Quant(#[from] QuantError),
}

/// Result type for palette extraction
pub type Result<T> = std::result::Result<T, Error>;
