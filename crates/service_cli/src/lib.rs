//! Command-line front end for the Black-Scholes pricer.
//!
//! As part of the **S**ervice layer, this crate collects the five market
//! inputs, applies the skip-pricing guard, calls the pricing kernel and renders
//! call/put values side by side above a Greeks table.
//!
//! # Modules
//!
//! - `config`: Layered configuration (defaults, TOML file, environment, flags)
//! - `error`: [`CliError`] and the crate [`Result`] alias
//! - `report`: [`report::PriceReport`] and `$X.XX` rendering
//! - `commands`: `price`, `quote` and `greek` command implementations

pub mod commands;
pub mod config;
pub mod error;
pub mod report;

pub use error::{CliError, Result};
