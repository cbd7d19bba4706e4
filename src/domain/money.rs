use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A currency amount.
///
/// Displayed without trailing zeros, so `50.0` prints as `50` and `12.50`
/// as `12.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// `None` unless the sum is exact. `Decimal` rounds away digits that do
    /// not fit in 96 bits instead of failing.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        let sum = self.0.checked_add(other.0)?;
        (sum.checked_sub(self.0)? == other.0).then_some(Money(sum))
    }

    /// `None` unless the difference is exact.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        let diff = self.0.checked_sub(other.0)?;
        (self.0.checked_sub(diff)? == other.0).then_some(Money(diff))
    }

    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        Decimal::from_str(s).ok().map(Money)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_decimal_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid Money format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn display_drops_trailing_zeros() {
        assert_eq!(Money::from_decimal_str("50.0").unwrap().to_string(), "50");
        assert_eq!(Money::from_decimal_str("100.00").unwrap().to_string(), "100");
        assert_eq!(Money::from_decimal_str("12.50").unwrap().to_string(), "12.5");
        assert_eq!(Money::from_decimal_str("-5.0").unwrap().to_string(), "-5");
        assert_eq!(Money::ZERO.to_string(), "0");
    }

    #[test]
    fn zero_is_not_positive() {
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::from(1).is_positive());
        assert!(Money::from(-1).is_negative());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Money::from_decimal_str("").is_none());
        assert!(Money::from_decimal_str("   ").is_none());
        assert!(Money::from_decimal_str("1.2.3").is_none());
        assert!(Money::from_decimal_str("ten").is_none());
    }

    #[test]
    fn decimal_sums_are_exact() {
        let a = Money::from_decimal_str("0.1").unwrap();
        let b = Money::from_decimal_str("0.2").unwrap();
        assert_eq!(a.checked_add(b), Money::from_decimal_str("0.3"));
        assert_eq!(b.checked_sub(a), Money::from_decimal_str("0.1"));
    }

    #[test]
    fn rounded_results_are_refused() {
        let big = Money::from_decimal_str("10000000000000000000000000000").unwrap();
        let tenth = Money::from_decimal_str("0.1").unwrap();
        let four_tenths = Money::from_decimal_str("0.4").unwrap();

        assert_eq!(big.checked_add(tenth), None);
        assert_eq!(big.checked_sub(four_tenths), None);
        assert_eq!(
            big.checked_sub(Money::from(1)),
            Money::from_decimal_str("9999999999999999999999999999")
        );
    }
}
