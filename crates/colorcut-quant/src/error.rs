//! Error types for colorcut-quant

use thiserror::Error;

/// Errors that can occur during color quantization
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantError {
    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Histogram was built at a different quantization depth than requested
    #[error("signal bits mismatch: options use {expected}, histogram uses {actual}")]
    SignalBitsMismatch { expected: u32, actual: u32 },

    /// A histogram cell would exceed `u32::MAX` samples
    #[error("histogram cell count overflow")]
    CountOverflow,

    /// Region reaches outside the histogram's quantized cube
    #[error("region {max:?} exceeds histogram axis length {axis_len}")]
    RegionOutOfRange { max: [u8; 3], axis_len: usize },
}

/// Result type for quantization operations
pub type QuantResult<T> = Result<T, QuantError>;
