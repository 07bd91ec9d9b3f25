//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Precondition violations reported by the strict
//!   Black-Scholes constructor

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Only [`BlackScholes::try_new`](super::BlackScholes::try_new) produces these;
/// the unchecked constructor lets degenerate inputs propagate as NaN or ∞.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Non-positive time to maturity
/// - `InvalidVolatility`: Non-positive volatility
/// - `NonFiniteInput`: NaN or infinite input
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity (non-positive).
    #[error("Invalid time to maturity: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Input is NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Name of the offending input
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
