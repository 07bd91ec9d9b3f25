//! Core market and error types.
//!
//! This module provides:
//! - `inputs`: The five-scalar market snapshot inputs and the skip-pricing guard
//! - `option_kind`: Two-variant call/put enumeration
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`MarketInputs`] from `inputs`
//! - [`OptionKind`] from `option_kind`
//! - [`PricingError`] from `error`

pub mod error;
pub mod inputs;
pub mod option_kind;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use inputs::{MarketInputs, DAYS_PER_YEAR};
pub use option_kind::OptionKind;
