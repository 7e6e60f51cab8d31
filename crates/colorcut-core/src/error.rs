//! Error types for colorcut-core
//!
//! Provides the error type for the color primitives.

use thiserror::Error;

/// colorcut core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A color string could not be parsed
    #[error("invalid color string: {0:?}")]
    InvalidColor(String),
}

/// Result type alias for colorcut core operations
pub type Result<T> = std::result::Result<T, Error>;
