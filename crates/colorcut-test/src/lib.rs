//! colorcut-test - Regression test framework for colorcut
//!
//! This crate provides a small regression harness. Each check increments
//! an index and failures are recorded instead of panicking;
//! [`RegParams::cleanup`] reports the outcome once at the end of the test.
//!
//! It also provides deterministic pixel fixtures shared by the
//! per-crate regression tests (see [`fixtures`]).
//!
//! # Usage
//!
//! ```ignore
//! use colorcut_test::RegParams;
//!
//! let mut rp = RegParams::new("mediancut");
//! rp.compare_values(2.0, palette.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display". In display
//!   mode comparisons are reported but never fail the test.

pub mod fixtures;
mod params;

pub use params::{RegParams, RegTestMode};
