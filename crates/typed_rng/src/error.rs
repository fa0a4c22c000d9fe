//! Error types for checked sampling.
//!
//! The unchecked sampling methods trust the caller. The `try_*` variants
//! validate their arguments first and report violations as [`RngError`].

use thiserror::Error;

/// Argument errors reported by the checked sampling variants.
///
/// # Examples
///
/// ```
/// use typed_rng::RngError;
///
/// let err = RngError::InvalidProbability(1.5);
/// assert_eq!(err.to_string(), "Invalid probability 1.5: must be in [0, 1]");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RngError {
    /// Lower bound greater than upper bound.
    #[error("Inverted bounds: min {min} is greater than max {max}")]
    InvertedBounds {
        /// Requested lower bound.
        min: String,
        /// Requested upper bound.
        max: String,
    },

    /// Real bounds, or their difference, are not finite.
    #[error("Non-finite range: [{min}, {max})")]
    NonFiniteRange {
        /// Requested lower bound.
        min: String,
        /// Requested upper bound.
        max: String,
    },

    /// Probability outside `[0, 1]`, or NaN.
    #[error("Invalid probability {0}: must be in [0, 1]")]
    InvalidProbability(f64),
}

impl RngError {
    pub(crate) fn inverted<T: std::fmt::Debug>(min: T, max: T) -> Self {
        Self::InvertedBounds {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }

    pub(crate) fn non_finite<T: std::fmt::Debug>(min: T, max: T) -> Self {
        Self::NonFiniteRange {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RngError::inverted(10, -10);
        assert_eq!(
            err.to_string(),
            "Inverted bounds: min 10 is greater than max -10"
        );

        let err = RngError::non_finite(0.0_f64, f64::INFINITY);
        assert!(err.to_string().contains("inf"));

        let err = RngError::InvalidProbability(-0.25);
        assert!(err.to_string().contains("-0.25"));
    }
}
