//! Price report construction and rendering.
//!
//! [`PriceReport::build`] is the collaborator boundary in front of the pricing
//! kernel: it validates the inputs, applies the skip-pricing guard and only
//! then evaluates a [`BlackScholes`] snapshot.

use pricer_core::types::{MarketInputs, PricingError};
use pricer_models::analytical::{BlackScholes, Greeks};
use serde::Serialize;
use tracing::{debug, warn};

use crate::Result;

/// Width of each column in the side-by-side price panel
const PANEL_WIDTH: usize = 22;

/// Formats a monetary amount as `$X.XX`.
///
/// # Examples
/// ```
/// use service_cli::report::dollar_format;
///
/// assert_eq!(dollar_format(10.450583572185568), "$10.45");
/// assert_eq!(dollar_format(0.0), "$0.00");
/// ```
pub fn dollar_format(price: f64) -> String {
    format!("${:.2}", price)
}

/// Call and put Greeks shown side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GreeksTable {
    pub call: Greeks,
    pub put: Greeks,
}

/// Everything the front end displays for one set of inputs.
///
/// When pricing is skipped both prices are zero and `greeks` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceReport {
    pub inputs: MarketInputs,
    pub skipped: bool,
    pub call_price: f64,
    pub put_price: f64,
    pub greeks: Option<GreeksTable>,
}

impl PriceReport {
    /// Builds the report for `inputs`.
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` for negative or non-finite inputs
    /// - `PricingError::NumericalInstability` if the engine returns a non-finite value
    pub fn build(inputs: &MarketInputs) -> std::result::Result<Self, PricingError> {
        inputs.validate()?;

        if inputs.should_skip_pricing() {
            warn!(?inputs, "Zero-valued input, pricing skipped");
            return Ok(Self {
                inputs: *inputs,
                skipped: true,
                call_price: 0.0,
                put_price: 0.0,
                greeks: None,
            });
        }

        let bs = BlackScholes::from_inputs(inputs);
        debug!(d1 = bs.d1(), d2 = bs.d2(), "Black-Scholes snapshot built");

        let valuation = bs.valuation();
        if !valuation.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "non-finite valuation for {:?}",
                inputs
            )));
        }

        Ok(Self {
            inputs: *inputs,
            skipped: false,
            call_price: valuation.call_price,
            put_price: valuation.put_price,
            greeks: Some(GreeksTable {
                call: valuation.call,
                put: valuation.put,
            }),
        })
    }

    /// Renders the side-by-side price panel and, when present, the Greeks table.
    pub fn render_table(&self) -> String {
        let rule = "─".repeat(PANEL_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("┌{rule}┬{rule}┐\n"));
        out.push_str(&format!(
            "│{:^w$}│{:^w$}│\n",
            "CALL Value",
            "PUT Value",
            w = PANEL_WIDTH
        ));
        out.push_str(&format!(
            "│{:^w$}│{:^w$}│\n",
            dollar_format(self.call_price),
            dollar_format(self.put_price),
            w = PANEL_WIDTH
        ));
        out.push_str(&format!("└{rule}┴{rule}┘\n"));

        if let Some(table) = &self.greeks {
            out.push('\n');
            out.push_str(&format!(" {:<6} │ {:>12} │ {:>12}\n", "Greek", "Call", "Put"));
            out.push_str(&format!(
                "{}┼{}┼{}\n",
                "─".repeat(8),
                "─".repeat(14),
                "─".repeat(14)
            ));
            let call_rows = table.call.named();
            let put_rows = table.put.named();
            for ((name, call), (_, put)) in call_rows.iter().zip(put_rows.iter()) {
                out.push_str(&format!(" {:<6} │ {:>12.6} │ {:>12.6}\n", name, call, put));
            }
        }

        out
    }

    /// Renders the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
