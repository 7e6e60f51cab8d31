//! Quantized color index space
//!
//! Each 8-bit channel is reduced to `signal_bits` bits by a right shift.
//! [`color_index`] maps a quantized `(r, g, b)` triple to its offset in the
//! flat histogram array; the histogram and every box read cells through it.

use crate::{QuantError, QuantResult};
use colorcut_core::Rgb;

/// Smallest supported quantization depth
pub const MIN_SIGNAL_BITS: u32 = 5;
/// Largest supported quantization depth (no quantization)
pub const MAX_SIGNAL_BITS: u32 = 8;
/// Quantization depth used by [`QuantizeOptions::default`](crate::QuantizeOptions)
pub const DEFAULT_SIGNAL_BITS: u32 = 5;

/// Check that `signal_bits` lies in `MIN_SIGNAL_BITS..=MAX_SIGNAL_BITS`
pub fn validate_signal_bits(signal_bits: u32) -> QuantResult<()> {
    if !(MIN_SIGNAL_BITS..=MAX_SIGNAL_BITS).contains(&signal_bits) {
        return Err(QuantError::InvalidParameters(format!(
            "signal_bits must be between {MIN_SIGNAL_BITS} and {MAX_SIGNAL_BITS}; got {signal_bits}"
        )));
    }
    Ok(())
}

/// Number of low-order bits discarded per channel
#[inline]
pub fn right_shift(signal_bits: u32) -> u32 {
    8 - signal_bits
}

/// Scale from a quantized coordinate back to the 0-255 range
#[inline]
pub fn multiplier(signal_bits: u32) -> u32 {
    1 << right_shift(signal_bits)
}

/// Number of quantized values per channel
#[inline]
pub fn axis_len(signal_bits: u32) -> usize {
    1 << signal_bits
}

/// Number of cells in a histogram of the given depth
#[inline]
pub fn histogram_len(signal_bits: u32) -> usize {
    1 << (3 * signal_bits)
}

/// Quantize one channel value
#[inline]
pub fn quantize_channel(value: u8, signal_bits: u32) -> u8 {
    value >> right_shift(signal_bits)
}

/// Quantize all three channels of a color
#[inline]
pub fn quantize(color: Rgb, signal_bits: u32) -> [u8; 3] {
    [
        quantize_channel(color.r, signal_bits),
        quantize_channel(color.g, signal_bits),
        quantize_channel(color.b, signal_bits),
    ]
}

/// Flat histogram offset of a quantized `(r, g, b)` triple
///
/// Formula: `(r << 2*signal_bits) | (g << signal_bits) | b`
#[inline]
pub fn color_index(r: u8, g: u8, b: u8, signal_bits: u32) -> usize {
    ((r as usize) << (2 * signal_bits)) | ((g as usize) << signal_bits) | b as usize
}
