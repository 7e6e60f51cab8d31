//! colorcut IO - Image decoding and pixel sampling
//!
//! Decodes image files through the `image` crate and reduces them to the
//! filtered RGB sample sequence consumed by `colorcut-quant`.

pub mod error;
pub mod sample;

pub use error::{IoError, IoResult};
pub use sample::{SampleOptions, read_image, sample_image, sample_path, sample_rgba};
