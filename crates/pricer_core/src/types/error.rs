//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations and their input boundaries

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidArgument`: Argument outside its contract (e.g. an option kind other than call/put)
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation produced an unusable result
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Argument outside its contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Returns true for [`PricingError::InvalidArgument`].
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PricingError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidArgument("unknown option kind 'straddle'".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid argument: unknown option kind 'straddle'"
        );

        let err = PricingError::InvalidInput("strike must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid input: strike must be positive");

        let err = PricingError::NumericalInstability("price is NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: price is NaN");
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(PricingError::InvalidArgument("x".to_string()).is_invalid_argument());
        assert!(!PricingError::InvalidInput("x".to_string()).is_invalid_argument());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("bad".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
