//! # pricer_core: Foundation Types for the Black-Scholes Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Market inputs: `MarketInputs` and the `should_skip_pricing` guard (`types::inputs`)
//! - Option kind: `OptionKind` (`types::option_kind`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{MarketInputs, OptionKind};
//!
//! let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! assert!(!inputs.should_skip_pricing());
//!
//! let kind: OptionKind = "call".parse().unwrap();
//! assert_eq!(kind, OptionKind::Call);
//! assert!("straddle".parse::<OptionKind>().is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `MarketInputs` and `OptionKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
