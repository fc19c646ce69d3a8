//! Monetary amounts backed by decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount as reported by the Shop API.
///
/// The API serializes amounts as plain JSON numbers in the currency's
/// standard unit (dollars, not cents). Amounts are carried through
/// verbatim; the frontends display them and never do price arithmetic
/// of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// A zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Price {
    /// Formats as a dollar string with two decimal places, e.g. `$19.99`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0.round_dp(2))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::new(Decimal::new(1999, 2));
        assert_eq!(price.to_string(), "$19.99");

        let whole = Price::new(Decimal::new(5, 0));
        assert_eq!(whole.to_string(), "$5.00");
    }

    #[test]
    fn test_zero() {
        assert_eq!(Price::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let price: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(price.to_string(), "$12.50");

        let whole: Price = serde_json::from_str("40").unwrap();
        assert_eq!(whole.to_string(), "$40.00");
    }
}
