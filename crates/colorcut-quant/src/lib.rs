//! colorcut Quant - Modified median cut color quantization
//!
//! This crate extracts a small palette of representative colors from pixel
//! samples by clustering them in quantized RGB space:
//!
//! - **Index space** ([`index`]): channel quantization and the flat cell index
//! - **Histogram** ([`histogram`]): population count per quantized cell
//! - **Boxes** ([`vbox`]): regions of the histogram with cached statistics
//! - **Ordering** ([`order`], [`queue`]): priority policies and the box queue
//! - **Median cut** ([`mediancut`]): the two-phase splitting driver
//! - **Palette** ([`palette`]): the ordered result and color mapping

pub mod error;
pub mod histogram;
pub mod index;
pub mod mediancut;
pub mod options;
pub mod order;
pub mod palette;
pub mod queue;
pub mod vbox;

// Re-export core types
pub use colorcut_core;

// Re-export error types
pub use error::{QuantError, QuantResult};

// Re-export index constants and functions
pub use index::{
    DEFAULT_SIGNAL_BITS, MAX_SIGNAL_BITS, MIN_SIGNAL_BITS, color_index, multiplier,
    quantize as quantize_color,
};

// Re-export quantization types and functions
pub use histogram::Histogram;
pub use mediancut::{median_cut_apply, median_cut_boxes, quantize, quantize_histogram, quantize_simple};
pub use options::QuantizeOptions;
pub use order::BoxOrder;
pub use palette::{Palette, PaletteEntry};
pub use queue::BoxQueue;
pub use vbox::{Channel, ColorRegion, VBox};
