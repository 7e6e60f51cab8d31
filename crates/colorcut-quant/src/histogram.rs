//! 3D color histogram
//!
//! Population counts over the quantized RGB cube, built in one pass over
//! the pixel samples and read-only afterwards. The builder also records the
//! tightest region containing every sample, which seeds the median cut.

use crate::index::{
    axis_len, color_index, histogram_len, multiplier, quantize, validate_signal_bits,
};
use crate::vbox::ColorRegion;
use crate::{QuantError, QuantResult};
use colorcut_core::Rgb;

/// Population count per quantized color cell
#[derive(Debug, Clone)]
pub struct Histogram {
    signal_bits: u32,
    counts: Vec<u32>,
    total: u64,
    occupied: Option<ColorRegion>,
}

impl Histogram {
    /// Build a histogram from a slice of pixel samples
    ///
    /// # Errors
    ///
    /// Returns an error if `signal_bits` is outside the supported range.
    /// An empty slice is not an error: it yields an empty histogram with
    /// no occupied region.
    pub fn from_pixels(pixels: &[Rgb], signal_bits: u32) -> QuantResult<Self> {
        Self::from_samples(pixels.iter().copied(), signal_bits)
    }

    /// Build a histogram from any sequence of pixel samples
    ///
    /// The samples are expected to be filtered already (alpha, background);
    /// every sample yielded is counted.
    ///
    /// # Errors
    ///
    /// Returns an error if `signal_bits` is outside the supported range, or
    /// if a single cell would receive more than `u32::MAX` samples.
    pub fn from_samples<I>(samples: I, signal_bits: u32) -> QuantResult<Self>
    where
        I: IntoIterator<Item = Rgb>,
    {
        validate_signal_bits(signal_bits)?;

        let mut counts = vec![0u32; histogram_len(signal_bits)];
        let mut total = 0u64;
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];

        for color in samples {
            let q = quantize(color, signal_bits);
            let idx = color_index(q[0], q[1], q[2], signal_bits);
            increment(&mut counts[idx])?;
            total += 1;

            for c in 0..3 {
                min[c] = min[c].min(q[c]);
                max[c] = max[c].max(q[c]);
            }
        }

        let occupied = (total > 0).then(|| ColorRegion::from_bounds(min, max));

        Ok(Self {
            signal_bits,
            counts,
            total,
            occupied,
        })
    }

    /// Quantization depth in bits per channel
    #[inline]
    pub fn signal_bits(&self) -> u32 {
        self.signal_bits
    }

    /// Scale from a quantized coordinate back to the 0-255 range
    #[inline]
    pub fn multiplier(&self) -> u32 {
        multiplier(self.signal_bits)
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no sample was counted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of samples counted
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Tightest region containing every sample, `None` when empty
    #[inline]
    pub fn occupied_region(&self) -> Option<ColorRegion> {
        self.occupied
    }

    /// Whether a quantized `(r, g, b)` cell lies inside the histogram
    #[inline]
    pub fn contains_cell(&self, r: u8, g: u8, b: u8) -> bool {
        let len = axis_len(self.signal_bits);
        [r, g, b].iter().all(|&c| (c as usize) < len)
    }

    /// Count at a quantized `(r, g, b)` cell
    ///
    /// Returns `None` if any coordinate is `>= 2^signal_bits`.
    #[inline]
    pub fn get(&self, r: u8, g: u8, b: u8) -> Option<u32> {
        self.contains_cell(r, g, b).then(|| self.cell(r, g, b))
    }

    /// Count at a cell already known to be in range
    #[inline]
    pub(crate) fn cell(&self, r: u8, g: u8, b: u8) -> u32 {
        self.counts[color_index(r, g, b, self.signal_bits)]
    }

    /// Count of the cell a full-resolution color falls into
    pub fn count_of(&self, color: Rgb) -> u32 {
        let [r, g, b] = quantize(color, self.signal_bits);
        self.cell(r, g, b)
    }

    /// Raw cell counts in index order
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of cells with non-zero population
    pub fn occupied_cells(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

fn increment(cell: &mut u32) -> QuantResult<()> {
    *cell = cell.checked_add(1).ok_or(QuantError::CountOverflow)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::from_pixels(&[], 5).unwrap();
        assert_eq!(hist.len(), 32768);
        assert_eq!(hist.total(), 0);
        assert!(hist.is_empty());
        assert!(hist.occupied_region().is_none());
    }

    #[test]
    fn test_counts_and_bounds() {
        let pixels = [
            Rgb::new(0, 0, 0),
            Rgb::new(7, 7, 7),
            Rgb::new(8, 16, 255),
            Rgb::new(200, 100, 50),
        ];
        let hist = Histogram::from_pixels(&pixels, 5).unwrap();

        assert_eq!(hist.total(), 4);
        assert_eq!(hist.get(0, 0, 0), Some(2));
        assert_eq!(hist.get(1, 2, 31), Some(1));
        assert_eq!(hist.count_of(Rgb::new(200, 100, 50)), 1);
        assert_eq!(hist.occupied_cells(), 3);

        let region = hist.occupied_region().unwrap();
        assert_eq!(region, ColorRegion::new(0, 25, 0, 12, 0, 31).unwrap());
    }

    #[test]
    fn test_sum_equals_total() {
        let pixels: Vec<Rgb> = (0..=255u8).map(|v| Rgb::new(v, 255 - v, v / 2)).collect();
        let hist = Histogram::from_pixels(&pixels, 6).unwrap();
        let sum: u64 = hist.counts().iter().map(|&c| c as u64).sum();
        assert_eq!(sum, hist.total());
        assert_eq!(sum, 256);
    }

    #[test]
    fn test_invalid_signal_bits() {
        assert!(Histogram::from_pixels(&[Rgb::new(1, 2, 3)], 4).is_err());
        assert!(Histogram::from_pixels(&[Rgb::new(1, 2, 3)], 9).is_err());
    }

    #[test]
    fn test_get_out_of_range() {
        let hist = Histogram::from_pixels(&[Rgb::new(8, 64, 0)], 5).unwrap();
        assert_eq!(hist.get(1, 8, 0), Some(1));
        assert_eq!(hist.get(0, 40, 0), None);
        assert_eq!(hist.get(32, 0, 0), None);
        assert!(hist.contains_cell(31, 31, 31));
        assert!(!hist.contains_cell(31, 31, 32));

        let deep = Histogram::from_pixels(&[], 8).unwrap();
        assert!(deep.contains_cell(255, 255, 255));
    }

    #[test]
    fn test_cell_overflow_is_an_error() {
        let mut cell = u32::MAX - 1;
        assert!(increment(&mut cell).is_ok());
        assert_eq!(cell, u32::MAX);
        assert_eq!(increment(&mut cell), Err(QuantError::CountOverflow));
        assert_eq!(cell, u32::MAX);
    }
}
