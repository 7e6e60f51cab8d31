//! colorcut - Dominant color and palette extraction
//!
//! Reduces an image to a handful of representative colors with the modified
//! median cut quantizer (MMCQ).
//!
//! # Crate Structure
//!
//! - color types from `colorcut-core`, re-exported at the root
//! - [`quant`] - histogram and median cut (`colorcut-quant`)
//! - [`io`] - decoding and pixel sampling (`colorcut-io`)
//!
//! # Example
//!
//! ```
//! use colorcut::{ExtractOptions, palette_from_image};
//! use image::{DynamicImage, Rgba, RgbaImage};
//!
//! let img = RgbaImage::from_fn(32, 32, |x, _| {
//!     if x < 16 { Rgba([220, 40, 40, 255]) } else { Rgba([40, 40, 220, 255]) }
//! });
//! let options = ExtractOptions::with_max_colors(2);
//! let palette = palette_from_image(&DynamicImage::ImageRgba8(img), &options).unwrap();
//! assert_eq!(palette.len(), 2);
//! ```

pub mod error;
pub mod extract;

// Re-export core types
pub use colorcut_core::{Hsl, Rgb};

// Re-export stage crates as modules to avoid name conflicts
pub use colorcut_io as io;
pub use colorcut_quant as quant;

pub use colorcut_io::SampleOptions;
pub use colorcut_quant::{Palette, PaletteEntry, QuantizeOptions};
pub use error::{Error, Result};
pub use extract::{
    DOMINANT_PALETTE_SIZE, ExtractOptions, dominant_color, palette_from_image, palette_from_path,
};
