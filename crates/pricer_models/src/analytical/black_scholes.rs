//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes snapshot for pricing European
//! call and put options with analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! [`BlackScholes::new`] does not validate. A zero or negative strike, expiry
//! or volatility appears as a divisor or logarithm argument and yields NaN or
//! ∞ downstream. Callers either screen inputs with
//! [`MarketInputs::should_skip_pricing`] or construct through
//! [`BlackScholes::try_new`].

use pricer_core::types::{MarketInputs, OptionKind, DAYS_PER_YEAR};

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::greeks::{Greeks, OptionValuation};

/// Scaling from a unit change to a one percentage point change.
const PERCENT: f64 = 100.0;

/// Immutable Black-Scholes snapshot for one set of market inputs.
///
/// d₁, d₂, √T and the discount factor are computed once in the constructor
/// and shared by every price and Greek query, so repeated queries on the same
/// snapshot always see the same (d₁, d₂) pair. There are no setters: a change
/// of any input means building a new snapshot.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let call_price = bs.price(OptionKind::Call);
/// let put_price = bs.price(OptionKind::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Time to maturity in years (T)
    expiry: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
    /// √T
    sqrt_t: f64,
    /// e^(-rT)
    discount: f64,
    d1: f64,
    d2: f64,
}

impl BlackScholes {
    /// Creates a snapshot without validating the inputs.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to maturity in years (T)
    /// * `rate` - Risk-free rate, continuously compounded (r)
    /// * `volatility` - Annualised volatility (σ)
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionKind;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// // At T = 0 with S = K, d1 is 0/0
    /// let bs = BlackScholes::new(100.0, 100.0, 0.0, 0.05, 0.2);
    /// assert!(bs.d1().is_nan());
    /// assert!(bs.price(OptionKind::Call).is_nan());
    /// ```
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = volatility * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (spot / strike).ln();
        let drift = (rate + 0.5 * volatility * volatility) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            sqrt_t,
            discount: (-rate * expiry).exp(),
            d1,
            d2,
        }
    }

    /// Creates a snapshot from a [`MarketInputs`] parameter object, unchecked.
    pub fn from_inputs(inputs: &MarketInputs) -> Self {
        Self::new(
            inputs.spot,
            inputs.strike,
            inputs.expiry,
            inputs.rate,
            inputs.volatility,
        )
    }

    /// Creates a snapshot, rejecting inputs outside the model's domain.
    ///
    /// Precondition: every input finite; spot, strike, expiry and volatility
    /// strictly positive. The rate may take any finite value.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any input is NaN or infinite
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::try_new(100.0, 100.0, 1.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::try_new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
    /// assert!(BlackScholes::try_new(100.0, 100.0, -1.0, 0.05, 0.2).is_err());
    /// ```
    pub fn try_new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        let named = [
            ("spot", spot),
            ("strike", strike),
            ("expiry", expiry),
            ("rate", rate),
            ("volatility", volatility),
        ];
        if let Some(&(name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AnalyticalError::NonFiniteInput { name, value });
        }

        if spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if expiry <= 0.0 {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }
        if volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self::new(spot, strike, expiry, rate, volatility))
    }

    /// Strict counterpart of [`BlackScholes::from_inputs`].
    pub fn try_from_inputs(inputs: &MarketInputs) -> Result<Self, AnalyticalError> {
        Self::try_new(
            inputs.spot,
            inputs.strike,
            inputs.expiry,
            inputs.rate,
            inputs.volatility,
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the inputs this snapshot was built from.
    pub fn inputs(&self) -> MarketInputs {
        MarketInputs::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
        )
    }

    /// Returns d₁ as fixed at construction.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns d₂ = d₁ - σ√T as fixed at construction.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Returns the discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        self.discount
    }

    /// Computes the European option price.
    ///
    /// - Call: C = S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionKind;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2);
    /// assert!((bs.price(OptionKind::Call) - 10.4506).abs() < 1e-3);
    /// assert!((bs.price(OptionKind::Put) - 5.5735).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price(&self, kind: OptionKind) -> f64 {
        let discounted_strike = self.strike * self.discount;
        match kind {
            OptionKind::Call => {
                self.spot * norm_cdf(self.d1) - discounted_strike * norm_cdf(self.d2)
            }
            OptionKind::Put => {
                discounted_strike * norm_cdf(-self.d2) - self.spot * norm_cdf(-self.d1)
            }
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, kind: OptionKind) -> f64 {
        let n_d1 = norm_cdf(self.d1);
        match kind {
            OptionKind::Call => n_d1,
            OptionKind::Put => n_d1 - 1.0,
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        norm_pdf(self.d1) / (self.spot * self.volatility * self.sqrt_t)
    }

    /// Computes Theta as time decay per calendar day.
    ///
    /// - Call: [-(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)] / 365
    /// - Put: [-(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)] / 365
    ///
    /// Usually negative: the option loses value as expiry approaches.
    #[inline]
    pub fn theta(&self, kind: OptionKind) -> f64 {
        // Common term: -(S·φ(d₁)·σ)/(2√T)
        let decay = -(self.spot * norm_pdf(self.d1) * self.volatility) / (2.0 * self.sqrt_t);
        let carry = self.rate * self.strike * self.discount;

        let annual = match kind {
            OptionKind::Call => decay - carry * norm_cdf(self.d2),
            OptionKind::Put => decay + carry * norm_cdf(-self.d2),
        };
        annual / DAYS_PER_YEAR
    }

    /// Computes Vega per one volatility point.
    ///
    /// Vega = S·φ(d₁)·√T / 100, identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.spot * norm_pdf(self.d1) * self.sqrt_t / PERCENT
    }

    /// Computes Rho per one rate point.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂) / 100
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂) / 100
    #[inline]
    pub fn rho(&self, kind: OptionKind) -> f64 {
        let discounted_strike_time = self.strike * self.expiry * self.discount;
        match kind {
            OptionKind::Call => discounted_strike_time * norm_cdf(self.d2) / PERCENT,
            OptionKind::Put => -discounted_strike_time * norm_cdf(-self.d2) / PERCENT,
        }
    }

    /// Collects all five sensitivities for one option kind.
    pub fn greeks(&self, kind: OptionKind) -> Greeks {
        Greeks {
            delta: self.delta(kind),
            gamma: self.gamma(),
            theta: self.theta(kind),
            vega: self.vega(),
            rho: self.rho(kind),
        }
    }

    /// Prices the call and the put and collects both Greeks sets.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let valuation = BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2).valuation();
    /// assert!(valuation.call_price > valuation.put_price);
    /// assert_eq!(valuation.call.gamma, valuation.put.gamma);
    /// ```
    pub fn valuation(&self) -> OptionValuation {
        OptionValuation {
            call_price: self.price(OptionKind::Call),
            put_price: self.price(OptionKind::Put),
            call: self.greeks(OptionKind::Call),
            put: self.greeks(OptionKind::Put),
        }
    }
}

impl From<&MarketInputs> for BlackScholes {
    fn from(inputs: &MarketInputs) -> Self {
        Self::from_inputs(inputs)
    }
}
