//! Pixel sampling
//!
//! Turns a decoded image into the filtered sample sequence the quantizer
//! consumes. Pixels are visited in row-major order with a fixed stride;
//! mostly transparent pixels and, optionally, near-white background pixels
//! are dropped.

use crate::{IoError, IoResult};
use colorcut_core::Rgb;
use image::{DynamicImage, RgbaImage};
use log::{debug, warn};
use std::path::Path;

/// Options for pixel sampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOptions {
    /// Sample every `quality`-th pixel; 1 visits every pixel
    pub quality: u32,
    /// Pixels with alpha below this are skipped
    pub min_alpha: u8,
    /// Skip pixels whose channels all exceed `white_threshold`
    pub ignore_white: bool,
    /// Channel value above which a pixel counts as white
    pub white_threshold: u8,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            quality: 10,
            min_alpha: 125,
            ignore_white: true,
            white_threshold: 250,
        }
    }
}

impl SampleOptions {
    /// Default filtering with a given stride
    pub fn with_quality(quality: u32) -> Self {
        Self {
            quality,
            ..Default::default()
        }
    }

    /// Check that the options describe a usable sampling pass
    pub fn validate(&self) -> IoResult<()> {
        if self.quality == 0 {
            return Err(IoError::InvalidParameter(
                "quality must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether an RGBA pixel survives filtering
    #[inline]
    pub fn accepts(&self, [r, g, b, a]: [u8; 4]) -> bool {
        if a < self.min_alpha {
            return false;
        }
        let t = self.white_threshold;
        !(self.ignore_white && r > t && g > t && b > t)
    }
}

/// Sample the pixels of an RGBA image
///
/// # Errors
///
/// Returns an error if `options.quality` is 0.
pub fn sample_rgba(image: &RgbaImage, options: &SampleOptions) -> IoResult<Vec<Rgb>> {
    options.validate()?;

    let step = options.quality as usize;
    let total = image.pixels().len();
    let samples: Vec<Rgb> = image
        .pixels()
        .step_by(step)
        .map(|p| p.0)
        .filter(|&px| options.accepts(px))
        .map(|[r, g, b, _]| Rgb::new(r, g, b))
        .collect();

    debug!(
        "sampled {} of {} pixels (step {})",
        samples.len(),
        total,
        step
    );
    if samples.is_empty() && total > 0 {
        warn!("every sampled pixel was filtered out");
    }
    Ok(samples)
}

/// Sample the pixels of a decoded image of any color type
pub fn sample_image(image: &DynamicImage, options: &SampleOptions) -> IoResult<Vec<Rgb>> {
    sample_rgba(&image.to_rgba8(), options)
}

/// Decode an image file
///
/// The format is detected from the file contents and extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<DynamicImage> {
    let image = image::open(path.as_ref())?;
    debug!(
        "decoded {} ({}x{})",
        path.as_ref().display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decode an image file and sample its pixels
pub fn sample_path<P: AsRef<Path>>(path: P, options: &SampleOptions) -> IoResult<Vec<Rgb>> {
    options.validate()?;
    let image = read_image(path)?;
    sample_image(&image, options)
}
