//! Modified median cut quantization
//!
//! Starting from the box spanning every occupied cell, repeatedly split the
//! maximum box of a priority queue until the palette is large enough:
//!
//! 1. Population phase: order by population until
//!    `fraction_by_population * max_colors` boxes exist.
//! 2. Significance phase: order by `population * volume` until
//!    `max_colors` boxes exist.
//!
//! Each phase pops at most `max_iterations` boxes. A box that cannot be cut
//! is set aside as a finished leaf and never retried. Every leaf contributes
//! its population-weighted average color to the palette.

use crate::histogram::Histogram;
use crate::options::QuantizeOptions;
use crate::order::BoxOrder;
use crate::palette::Palette;
use crate::queue::BoxQueue;
use crate::vbox::VBox;
use crate::{QuantError, QuantResult};
use colorcut_core::Rgb;
use log::{debug, trace};

// =============================================================================
// Splitting a single box
// =============================================================================

/// Cut a box in two at the population median of its widest channel
///
/// The cut point starts at the first coordinate whose cumulative population
/// exceeds half the box, then moves toward the middle of the longer side:
/// - `left <= right`: `min(max - 1, i + right / 2)`
/// - otherwise: `max(min, i - 1 - left / 2)`
///
/// where `left = i - min` and `right = max - i`. The cut then moves forward
/// past coordinates with no population below them, and backward while the
/// upper side would be empty and the slab below is occupied.
///
/// Returns `None` when the box is empty, covers a single cell, or no cut
/// leaves population on both sides. Only the widest channel is tried, so a
/// box whose samples share one coordinate on that channel is terminal.
pub fn median_cut_apply<'a>(vbox: &VBox<'a>) -> Option<(VBox<'a>, VBox<'a>)> {
    if vbox.count(false) == 0 {
        return None;
    }

    let region = vbox.region();
    let channel = region.widest_channel();
    let (lo, hi) = region.bounds(channel);
    if lo == hi {
        return None;
    }

    let profile = vbox.cumulative_profile(channel);
    let total = *profile.last()?;
    let last = profile.len() - 1;

    // First coordinate past the half-population mark
    let i = profile.iter().position(|&sum| sum > total / 2)?;
    let left = i;
    let right = last - i;

    // Relative coordinates: `min` is 0, so the lower clamp is implicit
    // (left > right implies i >= 1 and i - 1 - i / 2 >= 0).
    let mut d = if left <= right {
        (last - 1).min(i + right / 2)
    } else {
        i - 1 - left / 2
    };

    // Look ahead: the lower box must hold population
    while profile[d] == 0 {
        d += 1;
    }
    // Look behind: the upper box must hold population
    while total - profile[d] == 0 && d > 0 && profile[d - 1] > 0 {
        d -= 1;
    }

    if d >= last || total - profile[d] == 0 {
        trace!("box {:?} has no usable cut on {:?}", region, channel);
        return None;
    }

    let at = lo + d as u8;
    trace!(
        "cut box {:?} on {:?} at {} ({} | {})",
        region,
        channel,
        at,
        profile[d],
        total - profile[d]
    );
    Some(vbox.split_at(channel, at))
}

// =============================================================================
// Driver
// =============================================================================

/// Split boxes until `target` leaves exist, the queue runs dry, or
/// `max_iterations` boxes have been popped. Returns the number of pops.
fn split_until<'a>(
    queue: &mut BoxQueue<'a>,
    finished: &mut Vec<VBox<'a>>,
    target: usize,
    max_iterations: u32,
) -> u32 {
    let mut iterations = 0;
    while queue.len() + finished.len() < target && iterations < max_iterations {
        let Some(vbox) = queue.pop() else {
            break;
        };
        iterations += 1;

        match median_cut_apply(&vbox) {
            Some((first, second)) => {
                queue.push(first);
                queue.push(second);
            }
            None => finished.push(vbox),
        }
    }
    iterations
}

/// Run the median cut over a histogram and return the leaf boxes
///
/// Leaves still queued come first, maximum under `population * volume`
/// first, followed by boxes that could not be cut in the order they were
/// set aside. An empty histogram yields no boxes.
///
/// # Errors
///
/// Returns an error if `options` is invalid or was configured for a
/// different quantization depth than `histogram`.
pub fn median_cut_boxes<'a>(
    histogram: &'a Histogram,
    options: &QuantizeOptions,
) -> QuantResult<Vec<VBox<'a>>> {
    options.validate()?;
    if options.signal_bits != histogram.signal_bits() {
        return Err(QuantError::SignalBitsMismatch {
            expected: options.signal_bits,
            actual: histogram.signal_bits(),
        });
    }

    let Some(initial) = histogram.occupied_region() else {
        debug!("empty histogram, no boxes to split");
        return Ok(Vec::new());
    };

    let mut queue = BoxQueue::new(BoxOrder::Population);
    let mut finished = Vec::new();
    queue.push(VBox::from_region(initial, histogram));

    let target = options.population_phase_target();
    let pops = split_until(&mut queue, &mut finished, target, options.max_iterations);
    debug!(
        "population phase: {} pops, {} boxes (target {})",
        pops,
        queue.len() + finished.len(),
        target
    );

    let mut queue = queue.reorder(BoxOrder::PopulationVolume);
    let target = options.max_colors as usize;
    let pops = split_until(&mut queue, &mut finished, target, options.max_iterations);
    debug!(
        "significance phase: {} pops, {} boxes (target {})",
        pops,
        queue.len() + finished.len(),
        target
    );

    let mut boxes = queue.into_boxes();
    boxes.append(&mut finished);
    Ok(boxes)
}

/// Quantize a histogram into a palette
///
/// # Errors
///
/// Returns an error if `options` is invalid or was configured for a
/// different quantization depth than `histogram`.
pub fn quantize_histogram(histogram: &Histogram, options: &QuantizeOptions) -> QuantResult<Palette> {
    let boxes = median_cut_boxes(histogram, options)?;
    let palette = Palette::from_boxes(&boxes, histogram.signal_bits());
    debug!(
        "{} samples quantized to {} colors",
        histogram.total(),
        palette.len()
    );
    Ok(palette)
}

/// Quantize pixel samples into a palette of at most `options.max_colors`
///
/// The samples should already be filtered (alpha, background). Empty input
/// yields an empty palette and a single distinct color yields one entry.
///
/// # Errors
///
/// Returns an error if `options` is invalid. Options are checked before the
/// histogram is built.
///
/// # Example
///
/// ```
/// use colorcut_core::Rgb;
/// use colorcut_quant::{QuantizeOptions, quantize};
///
/// let mut pixels = vec![Rgb::new(250, 10, 10); 50];
/// pixels.extend(vec![Rgb::new(10, 10, 250); 50]);
///
/// let palette = quantize(&pixels, &QuantizeOptions::with_max_colors(2)).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
pub fn quantize(pixels: &[Rgb], options: &QuantizeOptions) -> QuantResult<Palette> {
    options.validate()?;
    let histogram = Histogram::from_pixels(pixels, options.signal_bits)?;
    quantize_histogram(&histogram, options)
}

/// Quantize with default options and a given palette size
pub fn quantize_simple(pixels: &[Rgb], max_colors: u32) -> QuantResult<Palette> {
    quantize(pixels, &QuantizeOptions::with_max_colors(max_colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vbox::{Channel, ColorRegion};

    fn hist(pixels: &[Rgb]) -> Histogram {
        Histogram::from_pixels(pixels, 5).unwrap()
    }

    #[test]
    fn test_single_cell_is_not_cut() {
        let h = hist(&[Rgb::new(40, 40, 40); 10]);
        let vbox = VBox::new(h.occupied_region().unwrap(), &h).unwrap();
        assert!(median_cut_apply(&vbox).is_none());
    }

    #[test]
    fn test_empty_box_is_not_cut() {
        let h = hist(&[Rgb::new(0, 0, 0)]);
        let vbox = VBox::new(ColorRegion::new(10, 20, 0, 0, 0, 0).unwrap(), &h).unwrap();
        assert!(median_cut_apply(&vbox).is_none());
    }

    #[test]
    fn test_two_clusters_cut_in_the_gap() {
        // Red cell 0 and red cell 31, equal populations
        let mut pixels = vec![Rgb::new(0, 0, 0); 4];
        pixels.extend([Rgb::new(255, 0, 0); 4]);
        let h = hist(&pixels);
        let vbox = VBox::new(h.occupied_region().unwrap(), &h).unwrap();

        let (a, b) = median_cut_apply(&vbox).unwrap();
        // i = 31, left = 31 -> d = 31 - 1 - 15 = 15
        assert_eq!(a.region().bounds(Channel::Red), (0, 15));
        assert_eq!(b.region().bounds(Channel::Red), (16, 31));
        assert_eq!(a.count(false), 4);
        assert_eq!(b.count(false), 4);
    }

    #[test]
    fn test_cut_moves_forward_past_empty_slabs() {
        // Red 20 x1 and red 31 x2 in a 0..=31 box. Profile is 0 up to 19,
        // 1 from 20 to 30, 3 at 31: i = 31, d = 31 - 1 - 15 = 15, which
        // has nothing below it, so the cut walks forward to 20.
        let h = hist(&[Rgb::new(160, 0, 0), Rgb::new(248, 0, 0), Rgb::new(248, 0, 0)]);
        let vbox = VBox::new(ColorRegion::new(0, 31, 0, 0, 0, 0).unwrap(), &h).unwrap();
        let (a, b) = median_cut_apply(&vbox).unwrap();
        assert_eq!(a.region().bounds(Channel::Red), (0, 20));
        assert_eq!(b.region().bounds(Channel::Red), (21, 31));
        assert_eq!(a.count(false), 1);
        assert_eq!(b.count(false), 2);
    }

    #[test]
    fn test_cut_moves_back_until_upper_side_is_occupied() {
        // Red 0 x3 and red 2 x1 in a 0..=15 box. i = 0, d = min(14, 0 + 7) = 7
        // leaves the upper box empty; stepping back stops at 1, the first
        // coordinate with population above it.
        let mut pixels = vec![Rgb::new(0, 0, 0); 3];
        pixels.push(Rgb::new(16, 0, 0));
        let h = hist(&pixels);
        let vbox = VBox::new(ColorRegion::new(0, 15, 0, 0, 0, 0).unwrap(), &h).unwrap();
        let (a, b) = median_cut_apply(&vbox).unwrap();
        assert_eq!(a.region().bounds(Channel::Red), (0, 1));
        assert_eq!(b.region().bounds(Channel::Red), (2, 15));
        assert_eq!(a.count(false), 3);
        assert_eq!(b.count(false), 1);
    }

    #[test]
    fn test_cut_moves_back_to_lower_bound() {
        // Red 0 x3 and red 1 x1: stepping back runs all the way to 0
        let mut pixels = vec![Rgb::new(0, 0, 0); 3];
        pixels.push(Rgb::new(8, 0, 0));
        let h = hist(&pixels);
        let vbox = VBox::new(ColorRegion::new(0, 15, 0, 0, 0, 0).unwrap(), &h).unwrap();
        let (a, b) = median_cut_apply(&vbox).unwrap();
        assert_eq!(a.region().bounds(Channel::Red), (0, 0));
        assert_eq!(b.region().bounds(Channel::Red), (1, 15));
        assert_eq!(a.count(false), 3);
        assert_eq!(b.count(false), 1);
    }

    #[test]
    fn test_cut_bounds_are_offset_by_box_minimum() {
        // Same shape as the forward case, shifted to a 4..=19 box
        let h = hist(&[Rgb::new(96, 0, 0), Rgb::new(152, 0, 0), Rgb::new(152, 0, 0)]);
        let vbox = VBox::new(ColorRegion::new(4, 19, 0, 0, 0, 0).unwrap(), &h).unwrap();
        let (a, b) = median_cut_apply(&vbox).unwrap();
        assert_eq!(a.region().bounds(Channel::Red), (4, 12));
        assert_eq!(b.region().bounds(Channel::Red), (13, 19));
    }

    #[test]
    fn test_population_at_one_coordinate_is_terminal() {
        // Widest channel is red but every sample sits at red cell 20
        let h = hist(&[Rgb::new(160, 0, 0), Rgb::new(160, 8, 0)]);
        let vbox = VBox::new(ColorRegion::new(0, 31, 0, 1, 0, 0).unwrap(), &h).unwrap();
        assert!(median_cut_apply(&vbox).is_none());
    }

    #[test]
    fn test_signal_bits_mismatch() {
        let h = Histogram::from_pixels(&[Rgb::new(1, 2, 3)], 6).unwrap();
        let err = quantize_histogram(&h, &QuantizeOptions::default()).unwrap_err();
        assert_eq!(
            err,
            QuantError::SignalBitsMismatch {
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn test_invalid_options_rejected_before_work() {
        assert!(quantize(&[], &QuantizeOptions::with_max_colors(0)).is_err());
    }

    #[test]
    fn test_empty_input() {
        let palette = quantize_simple(&[], 5).unwrap();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_max_colors_one() {
        let pixels = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        let palette = quantize_simple(&pixels, 1).unwrap();
        assert_eq!(palette.len(), 1);
    }
}
