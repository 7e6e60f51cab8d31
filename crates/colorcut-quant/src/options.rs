//! Quantization options

use crate::index::{DEFAULT_SIGNAL_BITS, validate_signal_bits};
use crate::{QuantError, QuantResult};

/// Options for modified median cut quantization
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeOptions {
    /// Maximum number of colors in the output palette
    pub max_colors: u32,
    /// Bits kept per channel when building the histogram (5..=8)
    pub signal_bits: u32,
    /// Cap on boxes popped per splitting phase; 0 disables splitting
    pub max_iterations: u32,
    /// Share of `max_colors` produced by the population-ordered phase
    /// before switching to population x volume ordering
    pub fraction_by_population: f64,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            max_colors: 10,
            signal_bits: DEFAULT_SIGNAL_BITS,
            max_iterations: 1000,
            fraction_by_population: 0.75,
        }
    }
}

impl QuantizeOptions {
    /// Default options with a different palette size
    pub fn with_max_colors(max_colors: u32) -> Self {
        Self {
            max_colors,
            ..Default::default()
        }
    }

    /// Check every field is in range
    ///
    /// # Errors
    ///
    /// Returns [`QuantError::InvalidParameters`] if `max_colors` is 0,
    /// `signal_bits` is outside 5..=8, or `fraction_by_population` is not a
    /// finite value in [0.0, 1.0].
    pub fn validate(&self) -> QuantResult<()> {
        if self.max_colors == 0 {
            return Err(QuantError::InvalidParameters(
                "max_colors must be at least 1".to_string(),
            ));
        }
        validate_signal_bits(self.signal_bits)?;
        if !(0.0..=1.0).contains(&self.fraction_by_population) {
            return Err(QuantError::InvalidParameters(format!(
                "fraction_by_population must be between 0.0 and 1.0; got {}",
                self.fraction_by_population
            )));
        }
        Ok(())
    }

    /// Box count at which the population-ordered phase stops
    pub(crate) fn population_phase_target(&self) -> usize {
        (self.fraction_by_population * self.max_colors as f64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let opts = QuantizeOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.population_phase_target(), 7);
    }

    #[test]
    fn test_rejects_zero_colors() {
        assert!(QuantizeOptions::with_max_colors(0).validate().is_err());
        assert!(QuantizeOptions::with_max_colors(1).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_fraction() {
        for fraction in [-0.1, 1.5, f64::NAN] {
            let opts = QuantizeOptions {
                fraction_by_population: fraction,
                ..Default::default()
            };
            assert!(opts.validate().is_err());
        }
    }

    #[test]
    fn test_rejects_bad_signal_bits() {
        let opts = QuantizeOptions {
            signal_bits: 3,
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(QuantError::InvalidParameters(_))
        ));
    }
}
