//! Quote command implementation
//!
//! Accepts market-quote conventions (maturity in calendar days, rate and
//! volatility in percent), converts them to model inputs and prices as the
//! `price` command does.

use std::io::Write;

use pricer_core::types::MarketInputs;
use tracing::debug;

use crate::config::OutputFormat;
use crate::report::PriceReport;
use crate::Result;

/// Option quoted in days and percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketQuote {
    pub spot: f64,
    pub strike: f64,
    pub days: f64,
    pub rate_pct: f64,
    pub volatility_pct: f64,
}

impl MarketQuote {
    /// Convert to model inputs (ACT/365, percent to decimal)
    pub fn to_inputs(&self) -> MarketInputs {
        MarketInputs::from_market_quote(
            self.spot,
            self.strike,
            self.days,
            self.rate_pct,
            self.volatility_pct,
        )
    }
}

/// Run the quote command
pub fn run<W: Write>(
    quote: &MarketQuote,
    format: OutputFormat,
    out: &mut W,
) -> Result<PriceReport> {
    let inputs = quote.to_inputs();
    debug!(?quote, ?inputs, "Converted market quote");
    super::price::run(&inputs, format, out)
}
