//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the currency. KRW and JPY
//! have no fractional unit, so an amount of `80000` in KRW is exactly ₩80,000.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    KRW,
    USD,
    EUR,
    JPY,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "KRW").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KRW => "KRW",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::JPY => "JPY",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₩").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::KRW => "\u{20a9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::JPY => "\u{00a5}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::KRW | Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "KRW" => Some(Currency::KRW),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "JPY" => Some(Currency::JPY),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₩80000", "$49.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(self.amount.checked_add(other.amount)?, self.currency))
    }

    /// Calculate a percentage of this amount, rounded to the nearest unit
    /// (halves round away from zero). Exact for every `i64` amount; results
    /// beyond the `i64` range saturate.
    pub fn percentage(&self, percent: u32) -> Money {
        let scaled = i128::from(self.amount) * i128::from(percent);
        let rounded = (scaled.abs() + 50) / 100 * scaled.signum();
        let saturated = if rounded < 0 { i64::MIN } else { i64::MAX };
        let amount = i64::try_from(rounded).unwrap_or(saturated);
        Money::new(amount, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(80000, Currency::KRW).display(), "\u{20a9}80000");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::new(80000, Currency::KRW);
        assert_eq!(m.percentage(50).amount, 40000);
        assert_eq!(m.percentage(100).amount, 80000);
        assert_eq!(m.percentage(0).amount, 0);
    }

    #[test]
    fn test_money_percentage_rounds_half_up() {
        let m = Money::new(33333, Currency::KRW);
        assert_eq!(m.percentage(50).amount, 16667);
    }

    #[test]
    fn test_money_percentage_is_exact_for_large_amounts() {
        let m = Money::new(9_007_199_254_740_993, Currency::KRW);
        assert_eq!(m.percentage(100).amount, 9_007_199_254_740_993);
        assert_eq!(m.percentage(50).amount, 4_503_599_627_370_497);
        assert_eq!(Money::new(i64::MAX, Currency::KRW).percentage(100).amount, i64::MAX);
        assert_eq!(Money::new(-33333, Currency::KRW).percentage(50).amount, -16667);
    }

    #[test]
    fn test_money_try_add_mismatch() {
        let krw = Money::new(1000, Currency::KRW);
        let usd = Money::new(1000, Currency::USD);
        assert!(krw.try_add(&usd).is_none());
        assert_eq!(krw.try_add(&krw).map(|m| m.amount), Some(2000));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("krw"), Some(Currency::KRW));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
