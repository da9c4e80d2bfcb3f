//! Input validation helpers
//!
//! Pure, stateless checks applied to raw shell input before it reaches the
//! service layer. Services defensively re-check the invariants that matter
//! to them; these helpers exist so the shell can give immediate feedback.

use chrono::NaiveDate;

use crate::models::Money;

/// Date format accepted for expense dates
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that a string is non-empty after trimming
pub fn non_empty(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Check that an amount is strictly positive
pub fn positive_amount(amount: Money) -> bool {
    amount.is_positive()
}

/// Parse a date string in YYYY-MM-DD form
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Parse an amount string, accepting only strictly positive values
pub fn parse_positive_amount(input: &str) -> Option<Money> {
    let amount: Money = input.trim().parse().ok()?;
    positive_amount(amount).then_some(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(non_empty("hello"));
        assert!(non_empty("  x  "));
        assert!(!non_empty(""));
        assert!(!non_empty("   "));
    }

    #[test]
    fn test_positive_amount() {
        assert!(positive_amount(Money::from_cents(1)));
        assert!(!positive_amount(Money::zero()));
        assert!(!positive_amount(Money::from_cents(-100)));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-14"),
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert_eq!(parse_date(" 2025-03-14 "), NaiveDate::from_ymd_opt(2025, 3, 14));
        assert!(parse_date("14/03/2025").is_none());
        assert!(parse_date("2025-13-40").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("12.50"), Some(Money::from_cents(1250)));
        assert!(parse_positive_amount("0").is_none());
        assert!(parse_positive_amount("-5.00").is_none());
        assert!(parse_positive_amount("abc").is_none());
        // Oversized or malformed input at the prompt must fail cleanly
        assert!(parse_positive_amount("999999999999999999").is_none());
        assert!(parse_positive_amount("1.-5").is_none());
    }
}
