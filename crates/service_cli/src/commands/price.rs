//! Price command implementation
//!
//! Prices the call and the put for one set of market inputs and prints them
//! side by side above the Greeks table.

use std::io::Write;

use pricer_core::types::MarketInputs;
use tracing::info;

use super::emit;
use crate::config::OutputFormat;
use crate::report::PriceReport;
use crate::Result;

/// Run the price command
pub fn run<W: Write>(
    inputs: &MarketInputs,
    format: OutputFormat,
    out: &mut W,
) -> Result<PriceReport> {
    info!("Starting pricing...");
    info!(
        spot = inputs.spot,
        strike = inputs.strike,
        expiry = inputs.expiry,
        rate = inputs.rate,
        volatility = inputs.volatility,
        %format,
        "Market inputs"
    );

    let report = PriceReport::build(inputs)?;
    emit(&report, format, out)?;

    info!(skipped = report.skipped, "Pricing complete");
    Ok(report)
}
