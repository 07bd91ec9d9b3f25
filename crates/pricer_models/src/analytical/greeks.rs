//! Aggregated Black-Scholes results.
//!
//! Provides [`Greeks`] (the five sensitivities for one option kind) and
//! [`OptionValuation`] (call and put prices with both Greeks sets), the shape
//! a front end needs to render prices side by side over a Greeks table.

use pricer_core::types::OptionKind;

/// First- and second-order sensitivities for one option kind.
///
/// # Units
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `theta`: value change per calendar day
/// - `vega`: value change per 1 volatility point
/// - `rho`: value change per 1 rate point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: f64,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: f64,
    /// Theta: time decay per day.
    pub theta: f64,
    /// Vega: sensitivity to a one point move in volatility.
    pub vega: f64,
    /// Rho: sensitivity to a one point move in the rate.
    pub rho: f64,
}

impl Greeks {
    /// Returns `(name, value)` pairs in display order.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("Delta", self.delta),
            ("Gamma", self.gamma),
            ("Theta", self.theta),
            ("Vega", self.vega),
            ("Rho", self.rho),
        ]
    }

    /// Returns true when every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        self.named().iter().all(|(_, v)| v.is_finite())
    }
}

/// Call and put valuation for one market snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionValuation {
    /// Call price.
    pub call_price: f64,
    /// Put price.
    pub put_price: f64,
    /// Call Greeks.
    pub call: Greeks,
    /// Put Greeks.
    pub put: Greeks,
}

impl OptionValuation {
    /// Price for the given kind.
    pub fn price(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_price,
            OptionKind::Put => self.put_price,
        }
    }

    /// Greeks for the given kind.
    pub fn greeks(&self, kind: OptionKind) -> &Greeks {
        match kind {
            OptionKind::Call => &self.call,
            OptionKind::Put => &self.put,
        }
    }

    /// Returns true when both prices and every Greek are finite.
    pub fn is_finite(&self) -> bool {
        self.call_price.is_finite()
            && self.put_price.is_finite()
            && self.call.is_finite()
            && self.put.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionValuation {
        OptionValuation {
            call_price: 10.45,
            put_price: 5.57,
            call: Greeks {
                delta: 0.64,
                gamma: 0.019,
                theta: -0.018,
                vega: 0.375,
                rho: 0.532,
            },
            put: Greeks {
                delta: -0.36,
                gamma: 0.019,
                theta: -0.005,
                vega: 0.375,
                rho: -0.419,
            },
        }
    }

    #[test]
    fn test_named_order() {
        let names: Vec<&str> = sample().call.named().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Delta", "Gamma", "Theta", "Vega", "Rho"]);
    }

    #[test]
    fn test_select_by_kind() {
        let valuation = sample();
        assert_eq!(valuation.price(OptionKind::Call), 10.45);
        assert_eq!(valuation.price(OptionKind::Put), 5.57);
        assert_eq!(valuation.greeks(OptionKind::Put).delta, -0.36);
    }

    #[test]
    fn test_is_finite() {
        let mut valuation = sample();
        assert!(valuation.is_finite());

        valuation.put.gamma = f64::NAN;
        assert!(!valuation.put.is_finite());
        assert!(!valuation.is_finite());
    }

    #[test]
    fn test_default_greeks_are_zero() {
        let greeks = Greeks::default();
        assert!(greeks.named().iter().all(|(_, v)| *v == 0.0));
    }
}
