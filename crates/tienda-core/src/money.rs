//! # Money Module
//!
//! Provides the `Money` type used for unit cost and sale price.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Form field "precio" arrives as text: "10.10"                          │
//! │    as f64 → 10.0999999999999996447286321199499070644378662109375       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "10.10" → 1010 cents, stored as INTEGER, rendered back as "10.10"   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tienda_core::money::Money;
//!
//! let price: Money = "15.5".parse().unwrap();
//!
//! assert_eq!(price.cents(), 1550);
//! assert_eq!(price.to_string(), "15.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest accepted whole-unit amount. Keeps `units * 100` far from overflow.
const MAX_UNITS: i64 = 1_000_000_000_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64**: matches SQLite INTEGER; parsing never yields a negative amount
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde transparent**: serializes as the plain cent count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tienda_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

}

// =============================================================================
// Parsing
// =============================================================================

/// Reasons a decimal string cannot become [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("value is empty")]
    Empty,

    #[error("must be a decimal number")]
    NotANumber,

    #[error("must not be negative")]
    Negative,

    #[error("at most two decimal places are allowed")]
    TooManyDecimals,

    #[error("value is too large")]
    Overflow,
}

/// Parses plain decimal text such as `"10"`, `"10.5"` or `"10.00"`.
///
/// Only ASCII digits with an optional single `.` are accepted. Signs,
/// exponents, thousands separators and more than two fractional digits are
/// rejected.
///
/// ## Example
/// ```rust
/// use tienda_core::money::{Money, ParseMoneyError};
///
/// assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
/// assert_eq!("1e3".parse::<Money>(), Err(ParseMoneyError::NotANumber));
/// ```
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }
        if s.starts_with('-') {
            return Err(ParseMoneyError::Negative);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
            return Err(ParseMoneyError::NotANumber);
        }
        if fraction.len() > 2 {
            return Err(ParseMoneyError::TooManyDecimals);
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError::Overflow)?
        };
        if units > MAX_UNITS {
            return Err(ParseMoneyError::Overflow);
        }

        // "5" → 50 cents, "05" → 5 cents
        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| ParseMoneyError::NotANumber)? * 10,
            _ => fraction.parse().map_err(|_| ParseMoneyError::NotANumber)?,
        };

        Ok(Money(units * 100 + fraction_cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as plain decimal text with two fractional digits (`"10.00"`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_parse_accepts_plain_decimals() {
        assert_eq!("10.00".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("0.5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("12.".parse::<Money>().unwrap().cents(), 1200);
        assert_eq!("  15.00 ".parse::<Money>().unwrap().cents(), 1500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("abc".parse::<Money>(), Err(ParseMoneyError::NotANumber));
        assert_eq!("1e3".parse::<Money>(), Err(ParseMoneyError::NotANumber));
        assert_eq!("1,50".parse::<Money>(), Err(ParseMoneyError::NotANumber));
        assert_eq!(".".parse::<Money>(), Err(ParseMoneyError::NotANumber));
        assert_eq!("1.2.3".parse::<Money>(), Err(ParseMoneyError::NotANumber));
        assert_eq!("+5".parse::<Money>(), Err(ParseMoneyError::NotANumber));
        assert_eq!("-1".parse::<Money>(), Err(ParseMoneyError::Negative));
        assert_eq!("1.234".parse::<Money>(), Err(ParseMoneyError::TooManyDecimals));
        assert_eq!(
            "99999999999999999999".parse::<Money>(),
            Err(ParseMoneyError::Overflow)
        );
    }

    #[test]
    fn test_display_roundtrips_parse() {
        let price: Money = "15.5".parse().unwrap();
        assert_eq!(price.to_string(), "15.50");
        assert_eq!(price.to_string().parse::<Money>().unwrap(), price);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(1000)).unwrap();
        assert_eq!(json, "1000");
    }
}
