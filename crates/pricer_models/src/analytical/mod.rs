//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Conventions
//!
//! - Theta is reported per calendar day (annual value / 365)
//! - Vega is per 1 percentage point of volatility (value / 100)
//! - Rho is per 1 percentage point of rate (value / 100)

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{Greeks, OptionValuation};
