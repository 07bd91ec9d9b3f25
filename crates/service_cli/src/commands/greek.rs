//! Greek command implementation
//!
//! Evaluates a single sensitivity for one option kind.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use pricer_core::types::{MarketInputs, OptionKind, PricingError};
use pricer_models::analytical::BlackScholes;
use tracing::info;

use crate::{CliError, Result};

/// Sensitivity selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greek {
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
}

impl Greek {
    /// Evaluate on `bs`. Gamma and vega do not depend on `kind`.
    pub fn evaluate(&self, bs: &BlackScholes, kind: OptionKind) -> f64 {
        match self {
            Greek::Delta => bs.delta(kind),
            Greek::Gamma => bs.gamma(),
            Greek::Theta => bs.theta(kind),
            Greek::Vega => bs.vega(),
            Greek::Rho => bs.rho(kind),
        }
    }
}

impl FromStr for Greek {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delta" => Ok(Greek::Delta),
            "gamma" => Ok(Greek::Gamma),
            "theta" => Ok(Greek::Theta),
            "vega" => Ok(Greek::Vega),
            "rho" => Ok(Greek::Rho),
            _ => Err(CliError::invalid_argument(format!(
                "unknown greek '{}': expected delta, gamma, theta, vega or rho",
                s
            ))),
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Theta => "Theta",
            Greek::Vega => "Vega",
            Greek::Rho => "Rho",
        };
        f.write_str(name)
    }
}

/// Run the greek command
pub fn run<W: Write>(inputs: &MarketInputs, greek: &str, kind: &str, out: &mut W) -> Result<f64> {
    let kind = OptionKind::from_str(kind)?;
    let greek = Greek::from_str(greek)?;

    inputs.validate()?;
    if inputs.should_skip_pricing() {
        return Err(CliError::PricingSkipped);
    }

    let value = greek.evaluate(&BlackScholes::from_inputs(inputs), kind);
    if !value.is_finite() {
        return Err(PricingError::NumericalInstability(format!(
            "non-finite {} for {:?}",
            greek, inputs
        ))
        .into());
    }
    info!(%greek, %kind, value, "Greek evaluated");

    writeln!(out, "{} ({}): {:.6}", greek, kind, value)?;
    Ok(value)
}
