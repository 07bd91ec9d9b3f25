//! Option kind enumeration.
//!
//! The pricing formulas branch on call versus put only. Modelling the kind as
//! a two-variant enum means every formula matches exhaustively, and strings
//! are validated once at the boundary through [`FromStr`].

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Kind of European option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// assert_eq!("Put".parse::<OptionKind>().unwrap(), OptionKind::Put);
/// assert_eq!(OptionKind::Call.to_string(), "call");
///
/// let err = "straddle".parse::<OptionKind>().unwrap_err();
/// assert!(err.is_invalid_argument());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike: max(S - K, 0) at expiry
    Call,
    /// Right to sell at the strike: max(K - S, 0) at expiry
    Put,
}

impl OptionKind {
    /// Both kinds, call first.
    pub const ALL: [OptionKind; 2] = [OptionKind::Call, OptionKind::Put];

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }

    /// Lowercase identifier accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    /// Capitalised label for display columns.
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidArgument(format!(
                "unknown option kind '{}': expected 'call' or 'put'",
                s
            ))),
        }
    }
}

impl TryFrom<&str> for OptionKind {
    type Error = PricingError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid_kinds() {
        assert_eq!(OptionKind::from_str("call").unwrap(), OptionKind::Call);
        assert_eq!(OptionKind::from_str("put").unwrap(), OptionKind::Put);
        assert_eq!(OptionKind::from_str("CALL").unwrap(), OptionKind::Call);
        assert_eq!(OptionKind::from_str(" Put ").unwrap(), OptionKind::Put);
    }

    #[test]
    fn test_parse_straddle_is_invalid_argument() {
        match OptionKind::from_str("straddle") {
            Err(PricingError::InvalidArgument(msg)) => assert!(msg.contains("straddle")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_is_invalid_argument() {
        assert!(OptionKind::from_str("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(OptionKind::try_from("call").unwrap(), OptionKind::Call);
        assert!(OptionKind::try_from("digital").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in OptionKind::ALL {
            assert_eq!(kind.to_string().parse::<OptionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_predicates_and_labels() {
        assert!(OptionKind::Call.is_call());
        assert!(!OptionKind::Call.is_put());
        assert!(OptionKind::Put.is_put());
        assert_eq!(OptionKind::Call.label(), "Call");
        assert_eq!(OptionKind::Put.label(), "Put");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OptionKind::Put).unwrap();
        assert_eq!(json, "\"put\"");
        let kind: OptionKind = serde_json::from_str("\"call\"").unwrap();
        assert_eq!(kind, OptionKind::Call);
        assert!(serde_json::from_str::<OptionKind>("\"straddle\"").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_only_call_and_put_parse(s in "[a-zA-Z]{0,10}") {
            let lower = s.to_lowercase();
            let parsed = OptionKind::from_str(&s);
            if lower == "call" || lower == "put" {
                prop_assert!(parsed.is_ok());
            } else {
                prop_assert!(parsed.unwrap_err().is_invalid_argument());
            }
        }
    }
}
