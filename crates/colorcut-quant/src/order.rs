//! Box ordering policies
//!
//! The median cut runs two phases that pick the next box to split under
//! different orders. Both are ascending orders over a scalar key; the box
//! split next is always the maximum.

use crate::vbox::VBox;
use std::cmp::Ordering;

/// Ordering policy over color boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxOrder {
    /// Ascending population count
    #[default]
    Population,
    /// Ascending `population * volume`
    PopulationVolume,
}

impl BoxOrder {
    /// Scalar key of a box under this order
    pub fn key(self, vbox: &VBox<'_>) -> u64 {
        match self {
            BoxOrder::Population => vbox.count(false),
            BoxOrder::PopulationVolume => vbox
                .count(false)
                .saturating_mul(vbox.volume(false) as u64),
        }
    }

    /// Compare two boxes under this order
    ///
    /// Boxes with equal keys compare equal; callers must not rely on any
    /// particular order among them.
    pub fn compare(self, a: &VBox<'_>, b: &VBox<'_>) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::Histogram;
    use crate::vbox::ColorRegion;
    use colorcut_core::Rgb;

    #[test]
    fn test_orders_disagree_on_sparse_box() {
        // Dense: 4 samples in one cell. Sparse: 3 samples over a wide region.
        let mut pixels = vec![Rgb::new(0, 0, 0); 4];
        pixels.extend([Rgb::new(128, 0, 0), Rgb::new(200, 0, 0), Rgb::new(255, 0, 0)]);
        let hist = Histogram::from_pixels(&pixels, 5).unwrap();

        let dense = VBox::new(ColorRegion::new(0, 0, 0, 0, 0, 0).unwrap(), &hist).unwrap();
        let sparse = VBox::new(ColorRegion::new(16, 31, 0, 0, 0, 0).unwrap(), &hist).unwrap();

        assert_eq!(BoxOrder::Population.compare(&dense, &sparse), Ordering::Greater);
        assert_eq!(
            BoxOrder::PopulationVolume.compare(&dense, &sparse),
            Ordering::Less
        );
        assert_eq!(BoxOrder::PopulationVolume.key(&sparse), 3 * 16);
    }
}
