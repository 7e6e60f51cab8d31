//! Color boxes in quantized RGB space
//!
//! A [`ColorRegion`] is an axis-aligned cuboid with inclusive bounds per
//! channel. A [`VBox`] pairs a region with the histogram it was cut from and
//! memoizes the three derived properties the median cut needs: volume,
//! population count and population-weighted average color.
//!
//! Bounds never change after construction; splitting a box always builds
//! two new boxes.

use crate::histogram::Histogram;
use crate::index::{axis_len, quantize};
use crate::{QuantError, QuantResult};
use colorcut_core::Rgb;
use std::cell::Cell;

/// Color channel selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels, in tie-break priority order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    #[inline]
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Axis-aligned region of quantized color space with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRegion {
    min: [u8; 3],
    max: [u8; 3],
}

impl ColorRegion {
    /// Create a region from inclusive quantized bounds
    ///
    /// # Errors
    ///
    /// Returns an error if any `min` exceeds its `max`.
    pub fn new(
        r_min: u8,
        r_max: u8,
        g_min: u8,
        g_max: u8,
        b_min: u8,
        b_max: u8,
    ) -> QuantResult<Self> {
        let min = [r_min, g_min, b_min];
        let max = [r_max, g_max, b_max];
        if min.iter().zip(&max).any(|(lo, hi)| lo > hi) {
            return Err(QuantError::InvalidParameters(format!(
                "region bounds must satisfy min <= max; got min {min:?}, max {max:?}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Caller guarantees `min[c] <= max[c]` for every channel.
    pub(crate) fn from_bounds(min: [u8; 3], max: [u8; 3]) -> Self {
        debug_assert!(min.iter().zip(&max).all(|(lo, hi)| lo <= hi));
        Self { min, max }
    }

    /// Copy of this region with one channel's bounds replaced
    pub(crate) fn with_bounds(self, channel: Channel, lo: u8, hi: u8) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        min[channel.index()] = lo;
        max[channel.index()] = hi;
        Self::from_bounds(min, max)
    }

    /// Inclusive `(min, max)` bounds of one channel
    #[inline]
    pub fn bounds(&self, channel: Channel) -> (u8, u8) {
        (self.min[channel.index()], self.max[channel.index()])
    }

    /// Lower corner `[r_min, g_min, b_min]`
    #[inline]
    pub fn min(&self) -> [u8; 3] {
        self.min
    }

    /// Upper corner `[r_max, g_max, b_max]`
    #[inline]
    pub fn max(&self) -> [u8; 3] {
        self.max
    }

    /// `max - min` along one channel
    #[inline]
    pub fn extent(&self, channel: Channel) -> u8 {
        self.max[channel.index()] - self.min[channel.index()]
    }

    /// Number of cells, `(max - min + 1)` multiplied over the three channels
    pub fn volume(&self) -> u32 {
        Channel::ALL
            .iter()
            .map(|&c| self.extent(c) as u32 + 1)
            .product()
    }

    /// Channel with the largest extent; ties prefer red, then green
    pub fn widest_channel(&self) -> Channel {
        let mut widest = Channel::Red;
        for c in [Channel::Green, Channel::Blue] {
            if self.extent(c) > self.extent(widest) {
                widest = c;
            }
        }
        widest
    }

    /// Whether a quantized `[r, g, b]` cell lies inside the region
    #[inline]
    pub fn contains(&self, cell: [u8; 3]) -> bool {
        (0..3).all(|c| self.min[c] <= cell[c] && cell[c] <= self.max[c])
    }

    /// Whether two regions share at least one cell
    pub fn intersects(&self, other: &ColorRegion) -> bool {
        (0..3).all(|c| self.min[c] <= other.max[c] && other.min[c] <= self.max[c])
    }

    /// Smallest region containing both regions
    pub fn union(&self, other: &ColorRegion) -> ColorRegion {
        let mut min = self.min;
        let mut max = self.max;
        for c in 0..3 {
            min[c] = min[c].min(other.min[c]);
            max[c] = max[c].max(other.max[c]);
        }
        Self::from_bounds(min, max)
    }

    /// Visit every cell as `(r, g, b)` in index order
    fn for_each_cell(&self, mut f: impl FnMut(u8, u8, u8)) {
        for r in self.min[0]..=self.max[0] {
            for g in self.min[1]..=self.max[1] {
                for b in self.min[2]..=self.max[2] {
                    f(r, g, b);
                }
            }
        }
    }
}

/// A color box: a region of a shared histogram with memoized statistics
///
/// Cloning shares the histogram and copies any cached values.
#[derive(Debug, Clone)]
pub struct VBox<'a> {
    region: ColorRegion,
    histogram: &'a Histogram,
    volume: Cell<Option<u32>>,
    count: Cell<Option<u64>>,
    average: Cell<Option<Rgb>>,
}

impl<'a> VBox<'a> {
    /// Create a box over `region` of `histogram`
    ///
    /// # Errors
    ///
    /// Returns [`QuantError::RegionOutOfRange`] if any upper bound is
    /// `>= 2^signal_bits` of the histogram.
    pub fn new(region: ColorRegion, histogram: &'a Histogram) -> QuantResult<Self> {
        let [r, g, b] = region.max();
        if !histogram.contains_cell(r, g, b) {
            return Err(QuantError::RegionOutOfRange {
                max: region.max(),
                axis_len: axis_len(histogram.signal_bits()),
            });
        }
        Ok(Self::from_region(region, histogram))
    }

    /// Caller guarantees `region` lies inside the histogram.
    pub(crate) fn from_region(region: ColorRegion, histogram: &'a Histogram) -> Self {
        Self {
            region,
            histogram,
            volume: Cell::new(None),
            count: Cell::new(None),
            average: Cell::new(None),
        }
    }

    /// Box bounds
    #[inline]
    pub fn region(&self) -> ColorRegion {
        self.region
    }

    /// Histogram this box reads from
    #[inline]
    pub fn histogram(&self) -> &'a Histogram {
        self.histogram
    }

    /// Number of cells in the box
    ///
    /// Computed once and cached; `force` recomputes.
    pub fn volume(&self, force: bool) -> u32 {
        match self.volume.get() {
            Some(v) if !force => v,
            _ => {
                let v = self.region.volume();
                self.volume.set(Some(v));
                v
            }
        }
    }

    /// Number of samples inside the box
    ///
    /// Scans every cell of the box. Computed once and cached; `force`
    /// rescans the histogram.
    pub fn count(&self, force: bool) -> u64 {
        match self.count.get() {
            Some(n) if !force => n,
            _ => {
                let hist = self.histogram;
                let mut n = 0u64;
                self.region.for_each_cell(|r, g, b| n += hist.cell(r, g, b) as u64);
                self.count.set(Some(n));
                n
            }
        }
    }

    /// Population-weighted average color of the box
    ///
    /// Each cell contributes `trunc(count * (coord + 0.5) * multiplier)` per
    /// channel; the sums are integer-divided by the total population. An
    /// empty box falls back to its geometric midpoint,
    /// `multiplier * (min + max + 1) / 2`. Computed once and cached; `force`
    /// recomputes.
    pub fn average(&self, force: bool) -> Rgb {
        if let Some(avg) = self.average.get()
            && !force
        {
            return avg;
        }

        let hist = self.histogram;
        let mult = hist.multiplier() as f64;
        let mut total = 0u64;
        let mut sums = [0u64; 3];

        self.region.for_each_cell(|r, g, b| {
            let h = hist.cell(r, g, b);
            if h == 0 {
                return;
            }
            total += h as u64;
            for (sum, coord) in sums.iter_mut().zip([r, g, b]) {
                *sum += (h as f64 * (coord as f64 + 0.5) * mult) as u64;
            }
        });

        let channels: [u64; 3] = if total > 0 {
            sums.map(|s| s / total)
        } else {
            let mult = hist.multiplier() as u64;
            let (min, max) = (self.region.min(), self.region.max());
            [0, 1, 2].map(|c| mult * (min[c] as u64 + max[c] as u64 + 1) / 2)
        };

        let [r, g, b] = channels.map(|v| u8::try_from(v).unwrap_or(u8::MAX));
        let avg = Rgb::new(r, g, b);
        self.average.set(Some(avg));
        avg
    }

    /// Whether a full-resolution color falls inside the box
    pub fn contains(&self, color: Rgb) -> bool {
        self.region
            .contains(quantize(color, self.histogram.signal_bits()))
    }

    /// Cumulative population along `channel`
    ///
    /// Entry `i` holds the number of samples whose coordinate on `channel`
    /// is at most `min + i`. The last entry equals [`count`](Self::count).
    pub fn cumulative_profile(&self, channel: Channel) -> Vec<u64> {
        let (lo, hi) = self.region.bounds(channel);
        let mut profile = vec![0u64; (hi - lo) as usize + 1];
        let hist = self.histogram;
        let axis = channel.index();

        self.region.for_each_cell(|r, g, b| {
            let coord = [r, g, b][axis];
            profile[(coord - lo) as usize] += hist.cell(r, g, b) as u64;
        });

        let mut running = 0u64;
        for slab in profile.iter_mut() {
            running += *slab;
            *slab = running;
        }
        profile
    }

    /// Two boxes splitting this one at `at` along `channel`
    ///
    /// The first spans `min..=at`, the second `at+1..=max`. Caller
    /// guarantees `min <= at < max` on that channel.
    pub(crate) fn split_at(&self, channel: Channel, at: u8) -> (VBox<'a>, VBox<'a>) {
        let (lo, hi) = self.region.bounds(channel);
        debug_assert!(lo <= at && at < hi);
        (
            VBox::from_region(self.region.with_bounds(channel, lo, at), self.histogram),
            VBox::from_region(self.region.with_bounds(channel, at + 1, hi), self.histogram),
        )
    }
}
