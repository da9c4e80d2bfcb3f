//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Summing expense amounts is exact integer arithmetic, so category
//! totals never drift with accumulation order. Parsing rejects amounts that
//! do not fit in i64 cents, and addition saturates at the i64 bounds rather
//! than wrapping, so crafted inputs cannot panic or corrupt totals.
//!
//! In the backing CSV files a Money value is written in fixed two-decimal
//! form ("12.50"), which is what the custom serde implementation produces.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// # Examples
    /// ```
    /// use spendtrack::models::Money;
    /// let amount = Money::from_units_cents(10, 50); // 10.50
    /// ```
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units.saturating_mul(100).saturating_add(cents))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format without a currency symbol, fixed two decimals ("12.50")
    ///
    /// This is the form used in the backing CSV files.
    pub fn plain(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = if let Some((units_str, cents_str)) = s.split_once('.') {
            // The fractional part must be pure digits; signs or stray
            // characters after the point are not an amount.
            if !cents_str.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let units: i64 = units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fractional part to 2 digits
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str
                    .get(..2)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units
                .checked_mul(100)
                .and_then(|c| c.checked_add(cents))
                .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
        } else {
            // Integer format - whole units
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
        }
    }
}

// Totals can accumulate over arbitrarily many records loaded from disk,
// so addition clamps at the i64 bounds instead of overflowing.

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// Serialize as the plain two-decimal text form so CSV rows read
// "12.50" rather than raw cents.

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.plain())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_units_cents() {
        let m = Money::from_units_cents(10, 50);
        assert_eq!(m.cents(), 1050);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
    }

    #[test]
    fn test_plain() {
        assert_eq!(Money::from_cents(1050).plain(), "10.50");
        assert_eq!(Money::from_cents(5).plain(), "0.05");
        assert_eq!(Money::from_cents(20000).plain(), "200.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!("10.50".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("$10.50".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("-10.50".parse::<Money>().unwrap().cents(), -1050);
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("12.x".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rejects_nondigit_fraction() {
        assert!("1.-5".parse::<Money>().is_err());
        assert!("1.+5".parse::<Money>().is_err());
        assert!("1.5x".parse::<Money>().is_err());
        assert!("1.5€".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        // Both the integer and decimal branches must refuse amounts whose
        // cent value does not fit in i64
        assert_eq!(
            "999999999999999999".parse::<Money>(),
            Err(MoneyParseError::OutOfRange("999999999999999999".to_string()))
        );
        assert!("999999999999999999.00".parse::<Money>().is_err());

        // The largest representable value still parses
        assert_eq!(
            "92233720368547758.07".parse::<Money>().unwrap().cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_parse_display_roundtrip() {
        let m = Money::from_cents(35000);
        let parsed: Money = m.plain().parse().unwrap();
        assert_eq!(m, parsed);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(10000),
            Money::from_cents(25000),
            Money::from_cents(25000),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 60000);
    }

    #[test]
    fn test_add_saturates_at_bounds() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);

        let mut total = Money::from_cents(i64::MAX - 10);
        total += Money::from_cents(100);
        assert_eq!(total, max);

        let min = Money::from_cents(i64::MIN);
        assert_eq!(min + Money::from_cents(-1), min);
    }

    #[test]
    fn test_comparison() {
        let threshold = Money::from_cents(20000);
        assert!(Money::from_cents(20001) > threshold);
        assert!(!(Money::from_cents(20000) > threshold));
    }
}
