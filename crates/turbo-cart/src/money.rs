//! Money type and price formatting.
//!
//! Amounts are integers in the currency's minor unit. The cart deals in a
//! single currency, so the amount carries no currency tag; the symbol only
//! appears when a [`PriceFormat`] renders it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary amount in minor currency units.
///
/// Arithmetic saturates instead of overflowing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw amount in minor units.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locale-aware price rendering: currency marker, one space, grouped digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    /// Locale tag the format was built for (e.g., "es-CO").
    pub locale: String,
    /// Currency marker placed before the amount.
    pub symbol: String,
    /// Thousands separator.
    pub group_separator: char,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::es_co()
    }
}

impl PriceFormat {
    /// Colombian peso grouping: `$ 40.000`.
    pub fn es_co() -> Self {
        Self {
            locale: "es-CO".to_string(),
            symbol: "$".to_string(),
            group_separator: '.',
        }
    }

    /// US grouping: `$ 40,000`.
    pub fn en_us() -> Self {
        Self {
            locale: "en-US".to_string(),
            symbol: "$".to_string(),
            group_separator: ',',
        }
    }

    /// Pick a preset by locale tag, falling back to es-CO.
    ///
    /// English locales group with a comma; everything else uses the es-CO
    /// dot grouping.
    pub fn from_locale(tag: &str) -> Self {
        let lang = tag
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let mut format = match lang.as_str() {
            "en" => Self::en_us(),
            _ => Self::es_co(),
        };
        format.locale = tag.to_string();
        format
    }

    /// Replace the currency marker.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Render an amount, e.g. `$ 1.234.567`.
    pub fn format(&self, amount: Money) -> String {
        let digits = amount.amount().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }

        let sign = if amount.is_negative() { "-" } else { "" };
        format!("{} {}{}", self.symbol, sign, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_addition() {
        let total = Money::new(20000) + Money::new(15000);
        assert_eq!(total.amount(), 35000);
    }

    #[test]
    fn test_money_times() {
        assert_eq!(Money::new(10000).times(3), Money::new(30000));
        assert_eq!(Money::new(10000) * 0, Money::zero());
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(i64::MAX);
        assert_eq!(big + Money::new(1), Money::new(i64::MAX));
        assert_eq!(big.times(2), Money::new(i64::MAX));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [1000, 2000, 3000].into_iter().map(Money::new).sum();
        assert_eq!(total.amount(), 6000);
    }

    #[test]
    fn test_money_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Money::new(40000)).unwrap(), "40000");
        let m: Money = serde_json::from_str("15000").unwrap();
        assert_eq!(m, Money::new(15000));
    }

    #[test]
    fn test_money_rejects_fractional_amounts() {
        assert!(serde_json::from_str::<Money>("10000.5").is_err());
        assert!(serde_json::from_str::<Money>("\"10000\"").is_err());
    }

    #[test]
    fn test_format_es_co() {
        let format = PriceFormat::es_co();
        assert_eq!(format.format(Money::new(40000)), "$ 40.000");
        assert_eq!(format.format(Money::new(1234567)), "$ 1.234.567");
        assert_eq!(format.format(Money::new(999)), "$ 999");
        assert_eq!(format.format(Money::zero()), "$ 0");
    }

    #[test]
    fn test_format_en_us() {
        let format = PriceFormat::en_us();
        assert_eq!(format.format(Money::new(40000)), "$ 40,000");
        assert_eq!(format.format(Money::new(100000)), "$ 100,000");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(PriceFormat::es_co().format(Money::new(-1500)), "$ -1.500");
    }

    #[test]
    fn test_format_from_locale() {
        assert_eq!(PriceFormat::from_locale("en-GB").group_separator, ',');
        assert_eq!(PriceFormat::from_locale("es-CO").group_separator, '.');
        assert_eq!(PriceFormat::from_locale("de_DE").group_separator, '.');
        assert_eq!(PriceFormat::from_locale("").locale, "");
    }

    #[test]
    fn test_format_custom_symbol() {
        let format = PriceFormat::es_co().with_symbol("COP");
        assert_eq!(format.format(Money::new(15000)), "COP 15.000");
    }
}
