//! Quantized palette
//!
//! The result of a median cut run: one entry per leaf box, ordered by
//! descending population. Each entry keeps its box bounds so arbitrary
//! colors can be mapped back onto the palette.

use crate::index::quantize;
use crate::vbox::{ColorRegion, VBox};
use colorcut_core::Rgb;

/// One palette color and the box it was averaged from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Population-weighted average color of the box
    pub color: Rgb,
    /// Number of samples inside the box
    pub population: u64,
    /// Box bounds in quantized space
    pub region: ColorRegion,
}

/// Ordered color palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    signal_bits: u32,
}

impl Palette {
    /// Empty palette for a histogram of the given depth
    pub fn empty(signal_bits: u32) -> Self {
        Self {
            entries: Vec::new(),
            signal_bits,
        }
    }

    /// Build a palette from leaf boxes
    ///
    /// Entries are sorted by descending population; equal populations keep
    /// the order of `boxes`.
    pub fn from_boxes(boxes: &[VBox<'_>], signal_bits: u32) -> Self {
        let mut entries: Vec<PaletteEntry> = boxes
            .iter()
            .map(|vbox| PaletteEntry {
                color: vbox.average(false),
                population: vbox.count(false),
                region: vbox.region(),
            })
            .collect();
        entries.sort_by(|a, b| b.population.cmp(&a.population));

        Self {
            entries,
            signal_bits,
        }
    }

    /// Quantization depth the regions are expressed in
    #[inline]
    pub fn signal_bits(&self) -> u32 {
        self.signal_bits
    }

    /// Number of colors
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no colors
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by index
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// All entries, most populated first
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterate over entries, most populated first
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Palette colors, most populated first
    pub fn colors(&self) -> Vec<Rgb> {
        self.entries.iter().map(|e| e.color).collect()
    }

    /// The most populated color
    pub fn dominant(&self) -> Option<Rgb> {
        self.entries.first().map(|e| e.color)
    }

    /// Total number of samples across all entries
    pub fn total_population(&self) -> u64 {
        self.entries.iter().map(|e| e.population).sum()
    }

    /// Share of the total population held by entry `index`
    pub fn proportion(&self, index: usize) -> Option<f64> {
        let total = self.total_population();
        let entry = self.entries.get(index)?;
        if total == 0 {
            return Some(0.0);
        }
        Some(entry.population as f64 / total as f64)
    }

    /// Palette color for an arbitrary color
    ///
    /// Returns the color of the entry whose box contains `color`; colors
    /// outside every box fall back to [`nearest`](Self::nearest).
    pub fn map(&self, color: Rgb) -> Option<Rgb> {
        let cell = quantize(color, self.signal_bits);
        self.entries
            .iter()
            .find(|e| e.region.contains(cell))
            .map(|e| e.color)
            .or_else(|| self.nearest(color))
    }

    /// Palette color closest to `color` in RGB space
    ///
    /// Ties keep the more populated entry.
    pub fn nearest(&self, color: Rgb) -> Option<Rgb> {
        let mut best: Option<(u32, Rgb)> = None;
        for entry in &self.entries {
            let d = color.distance_squared(entry.color);
            if best.is_none_or(|(best_d, _)| d < best_d) {
                best = Some((d, entry.color));
            }
        }
        best.map(|(_, c)| c)
    }
}

impl<'p> IntoIterator for &'p Palette {
    type Item = &'p PaletteEntry;
    type IntoIter = std::slice::Iter<'p, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::Histogram;

    fn two_box_palette(hist: &Histogram) -> Palette {
        let low = VBox::new(ColorRegion::new(0, 15, 0, 31, 0, 31).unwrap(), hist).unwrap();
        let high = VBox::new(ColorRegion::new(16, 31, 0, 31, 0, 31).unwrap(), hist).unwrap();
        Palette::from_boxes(&[low, high], hist.signal_bits())
    }

    #[test]
    fn test_sorted_by_population() {
        let mut pixels = vec![Rgb::new(10, 10, 10)];
        pixels.extend([Rgb::new(250, 10, 10); 3]);
        let hist = Histogram::from_pixels(&pixels, 5).unwrap();
        let palette = two_box_palette(&hist);

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(0).unwrap().population, 3);
        assert_eq!(palette.get(1).unwrap().population, 1);
        assert_eq!(palette.total_population(), 4);
        assert_eq!(palette.proportion(0), Some(0.75));
        assert_eq!(palette.proportion(2), None);
    }

    #[test]
    fn test_map_uses_containing_box() {
        let mut pixels = vec![Rgb::new(10, 10, 10)];
        pixels.extend([Rgb::new(250, 10, 10); 3]);
        let hist = Histogram::from_pixels(&pixels, 5).unwrap();
        let palette = two_box_palette(&hist);

        // 120 quantizes to red cell 15, inside the low box even though the
        // high-box color is not much farther away
        let dominant = palette.dominant().unwrap();
        let low = palette.get(1).unwrap().color;
        assert_eq!(palette.map(Rgb::new(120, 10, 10)), Some(low));
        assert_eq!(palette.map(Rgb::new(130, 10, 10)), Some(dominant));
    }

    #[test]
    fn test_nearest() {
        let hist = Histogram::from_pixels(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)], 5).unwrap();
        let palette = two_box_palette(&hist);
        let dark = palette.nearest(Rgb::new(20, 20, 20)).unwrap();
        assert!(dark.is_dark());
        assert!(Palette::empty(5).nearest(Rgb::new(0, 0, 0)).is_none());
        assert!(Palette::empty(5).map(Rgb::new(0, 0, 0)).is_none());
    }
}
