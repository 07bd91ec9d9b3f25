//! Market inputs for a single Black-Scholes evaluation.
//!
//! [`MarketInputs`] is the parameter object passed from the front end into the
//! pricing engine's factory. It carries the five raw scalars and nothing else;
//! derived quantities live on the engine snapshot.

use super::error::PricingError;

/// Day count used to convert calendar days to year fractions (ACT/365).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// The five scalar inputs of the Black-Scholes model.
///
/// Rates and volatilities are decimals (0.05 for 5%), expiry is in years.
/// The default value is all zeros, which [`MarketInputs::should_skip_pricing`]
/// treats as "no meaningful option".
///
/// # Examples
/// ```
/// use pricer_core::types::MarketInputs;
///
/// let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// assert!(!inputs.should_skip_pricing());
///
/// let blank = MarketInputs::default();
/// assert!(blank.should_skip_pricing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketInputs {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Continuously-compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
}

impl MarketInputs {
    /// Creates a new set of market inputs. No validation is performed.
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        }
    }

    /// Creates inputs from a market-quote convention.
    ///
    /// Maturity is given in calendar days and converted with ACT/365; rate and
    /// volatility are given in percent.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::MarketInputs;
    ///
    /// let inputs = MarketInputs::from_market_quote(100.0, 100.0, 365.0, 5.0, 20.0);
    /// assert_eq!(inputs, MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2));
    /// ```
    pub fn from_market_quote(
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        rate_pct: f64,
        volatility_pct: f64,
    ) -> Self {
        Self::new(
            spot,
            strike,
            days_to_expiry / DAYS_PER_YEAR,
            rate_pct / 100.0,
            volatility_pct / 100.0,
        )
    }

    /// Returns true when any of spot, strike, expiry or volatility is zero.
    ///
    /// A zero in any of these means there is no meaningful option to price;
    /// callers display a price of zero and omit the Greeks instead of calling
    /// the engine. The rate is excluded, a zero rate is a valid market.
    #[inline]
    pub fn should_skip_pricing(&self) -> bool {
        self.spot == 0.0 || self.strike == 0.0 || self.expiry == 0.0 || self.volatility == 0.0
    }

    /// Returns true when every input is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.spot.is_finite()
            && self.strike.is_finite()
            && self.expiry.is_finite()
            && self.rate.is_finite()
            && self.volatility.is_finite()
    }

    /// Checks the input-collection constraints.
    ///
    /// Spot, strike, expiry and volatility must be non-negative and every
    /// input must be finite. Zero is accepted here and left to
    /// [`MarketInputs::should_skip_pricing`].
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` naming the first offending field
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("rate", self.rate),
            ("volatility", self.volatility),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if name != "rate" && value < 0.0 {
                return Err(PricingError::InvalidInput(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
