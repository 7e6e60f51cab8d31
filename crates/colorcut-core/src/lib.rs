//! colorcut Core - Basic color types for palette extraction
//!
//! This crate provides the fundamental types used throughout the colorcut
//! workspace:
//!
//! - [`Rgb`] - 8-bit RGB pixel sample and palette color
//! - [`Hsl`] - Hue/Saturation/Lightness presentation form
//! - [`Error`] / [`Result`] - Shared error type

pub mod color;
pub mod error;

pub use color::{Hsl, Rgb};
pub use error::{Error, Result};
