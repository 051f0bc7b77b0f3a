//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In a JavaScript storefront:                                            │
//! │    24.99 * 3 = 74.97000000000001   ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2499 cents * 3 = 7497 cents     ✅ exact                             │
//! │                                                                         │
//! │  Cart totals are sums of exact products, so they stay exact too.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bouticlick_core::money::Money;
//!
//! let price = Money::from_cents(2499); // $24.99
//! let line = price * 2;                // $49.98
//! assert_eq!(line.cents(), 4998);
//!
//! // Decimal strings (catalog data, CLI input) are parsed exactly
//! let parsed = Money::from_decimal_str("79.99").unwrap();
//! assert_eq!(parsed.cents(), 7999);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative amounts can be represented; prices are
///   validated as non-negative and bounded where they enter the system
/// - **Saturating arithmetic**: sums and products never panic
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a bare integer**: `{"price": 7999}`
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartCandidate.price ──► LineItem.price ──► line_total()
///                                                                  │
///                                   CartSnapshot.total ◄── sum ────┘
///                                          │
///                                          ▼
///                                     Order.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bouticlick_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a non-negative decimal amount such as `"79.99"`, `"5"` or `"0.5"`.
    ///
    /// ## Rules
    /// - Digits, optionally followed by `.` and one or two fractional digits
    /// - A leading `$` is tolerated (pasted prices)
    /// - Negative amounts, empty strings and more than two fractional digits
    ///   are rejected rather than rounded
    ///
    /// ## Example
    /// ```rust
    /// use bouticlick_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("24.99").unwrap().cents(), 2499);
    /// assert_eq!(Money::from_decimal_str("$10").unwrap().cents(), 1000);
    /// assert_eq!(Money::from_decimal_str("0.5").unwrap().cents(), 50);
    /// assert!(Money::from_decimal_str("1.999").is_err());
    /// assert!(Money::from_decimal_str("-3").is_err());
    /// ```
    pub fn from_decimal_str(input: &str) -> Result<Money, ValidationError> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        if trimmed.starts_with('-') {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        let (whole, frac) = match trimmed.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (trimmed, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a decimal amount like 12.34"));
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let major: i64 = whole
            .parse()
            .map_err(|_| invalid("amount is too large"))?;
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => frac.parse::<i64>().map_err(|_| invalid("bad fraction"))?,
        };

        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use bouticlick_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2499); // $24.99
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 4998);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$12.34` / `-$5.50`.
///
/// ## Note
/// The storefront's configured currency symbol is applied by
/// `AppConfig::format_currency`; this impl is the USD default.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Totals saturate instead of overflowing; prices and stock are bounded on
// the way in, so saturation only shows up on hand-built values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Lets totals be written as `items.iter().map(LineItem::line_total).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(huge.multiply_quantity(3), Money::from_cents(i64::MAX));
        assert_eq!(huge * 3, Money::from_cents(i64::MAX));
        assert_eq!(huge + huge + huge, Money::from_cents(i64::MAX));

        let total: Money = vec![huge, huge, huge].into_iter().sum();
        assert_eq!(total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(7999), Money::from_cents(2499) * 2];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 12997);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_float_free_line_total() {
        // 24.99 * 3 in binary floating point is 74.97000000000001
        let line = Money::from_cents(2499).multiply_quantity(3);
        assert_eq!(line.to_string(), "$74.97");
    }

    #[test]
    fn test_from_decimal_str() {
        assert_eq!(Money::from_decimal_str("79.99").unwrap().cents(), 7999);
        assert_eq!(Money::from_decimal_str("129.9").unwrap().cents(), 12990);
        assert_eq!(Money::from_decimal_str("5").unwrap().cents(), 500);
        assert_eq!(Money::from_decimal_str(" $0.05 ").unwrap().cents(), 5);
        assert_eq!(Money::from_decimal_str("10.").unwrap().cents(), 1000);
    }

    #[test]
    fn test_from_decimal_str_rejects_bad_input() {
        assert!(matches!(
            Money::from_decimal_str(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Money::from_decimal_str("-1.00"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(Money::from_decimal_str("1.234").is_err());
        assert!(Money::from_decimal_str("abc").is_err());
        assert!(Money::from_decimal_str(".50").is_err());
        assert!(Money::from_decimal_str("99999999999999999999").is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(2499)).unwrap();
        assert_eq!(json, "2499");
        let back: Money = serde_json::from_str("2499").unwrap();
        assert_eq!(back, Money::from_cents(2499));
    }
}
