//! Palette extraction from images
//!
//! Chains sampling and quantization: decode, sample with stride and
//! filtering, build the histogram, run the median cut.

use crate::Result;
use colorcut_core::Rgb;
use colorcut_io::{SampleOptions, read_image, sample_image};
use colorcut_quant::{Palette, QuantizeOptions, quantize};
use image::DynamicImage;
use log::debug;
use std::path::Path;

/// Palette size used by [`dominant_color`]
pub const DOMINANT_PALETTE_SIZE: u32 = 5;

/// Options for palette extraction
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// How pixels are picked from the image
    pub sample: SampleOptions,
    /// How the samples are clustered
    pub quantize: QuantizeOptions,
}

impl ExtractOptions {
    /// Default sampling and quantization with a given palette size
    pub fn with_max_colors(max_colors: u32) -> Self {
        Self {
            sample: SampleOptions::default(),
            quantize: QuantizeOptions::with_max_colors(max_colors),
        }
    }

    /// Validate both option sets
    pub fn validate(&self) -> Result<()> {
        self.sample.validate()?;
        self.quantize.validate()?;
        Ok(())
    }
}

/// Extract a palette from a decoded image
///
/// The palette is ordered by descending population. It is empty when
/// every pixel was filtered out.
///
/// # Errors
///
/// Returns an error if either option set is invalid.
pub fn palette_from_image(image: &DynamicImage, options: &ExtractOptions) -> Result<Palette> {
    options.validate()?;
    let samples = sample_image(image, &options.sample)?;
    let palette = quantize(&samples, &options.quantize)?;
    debug!(
        "extracted {} colors from {} samples",
        palette.len(),
        samples.len()
    );
    Ok(palette)
}

/// Decode an image file and extract its palette
pub fn palette_from_path<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Palette> {
    options.validate()?;
    let image = read_image(path)?;
    palette_from_image(&image, options)
}

/// Most representative color of an image
///
/// The first entry of a small palette built with default sampling.
/// Returns `None` when nothing survives filtering.
pub fn dominant_color(image: &DynamicImage) -> Result<Option<Rgb>> {
    let options = ExtractOptions::with_max_colors(DOMINANT_PALETTE_SIZE);
    Ok(palette_from_image(image, &options)?.dominant())
}
