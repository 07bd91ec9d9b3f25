//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form European option pricing under Black-Scholes.
//!
//! This crate provides:
//! - Standard normal CDF and PDF
//! - The `BlackScholes` snapshot: five inputs plus d1/d2 computed once
//! - Prices and Greeks (Delta, Gamma, Theta, Vega, Rho) for calls and puts
//! - Aggregated `Greeks` and `OptionValuation` results
//!
//! ## Design Principles
//!
//! - **Immutable snapshots**: every query reuses the d1/d2 fixed at construction
//! - **Enum-based option kind**: exhaustive matching, no silent third case
//! - **Unchecked by default**: degenerate inputs propagate to non-finite values;
//!   `BlackScholes::try_new` is the strict alternative

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
