//! Naira amounts held as integral kobo.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const KOBO_PER_NAIRA: i64 = 100;

/// Monetary amount in minor units (kobo).
///
/// # Examples
///
/// ```
/// use client::domain::Money;
///
/// let amount: Money = "1,250.5".parse().expect("valid amount");
/// assert_eq!(amount.minor_units(), 125_050);
/// assert_eq!(amount.to_string(), "₦1,250.50");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero naira.
    pub const ZERO: Self = Self(0);

    /// Wrap an amount already expressed in kobo.
    pub const fn from_minor(kobo: i64) -> Self {
        Self(kobo)
    }

    /// Build an amount from whole naira, saturating on overflow.
    pub const fn from_naira(naira: i64) -> Self {
        Self(naira.saturating_mul(KOBO_PER_NAIRA))
    }

    /// Amount in kobo.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Add two amounts, returning `None` on overflow.
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Whether the amount is strictly positive.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let naira = magnitude.div_euclid(KOBO_PER_NAIRA.unsigned_abs());
        let kobo = magnitude.rem_euclid(KOBO_PER_NAIRA.unsigned_abs());
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}₦{}.{kobo:02}", group_thousands(naira))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len().div_euclid(3));
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index).rem_euclid(3) == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Errors raised when parsing a typed amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// Input was blank.
    #[error("amount must not be empty")]
    Empty,
    /// Input contained something other than digits, commas, and one point.
    #[error("amount '{input}' is not a number")]
    Invalid {
        /// The rejected input.
        input: String,
    },
    /// More than two digits followed the decimal point.
    #[error("amount '{input}' has more than two decimal places")]
    TooPrecise {
        /// The rejected input.
        input: String,
    },
    /// The amount does not fit in the supported range.
    #[error("amount '{input}' is too large")]
    Overflow {
        /// The rejected input.
        input: String,
    },
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parse a non-negative naira amount as typed into a form, such as
    /// `500`, `1,250.50`, or `₦75.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let cleaned: String = trimmed
            .trim_start_matches('₦')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        if cleaned.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::Invalid {
            input: trimmed.to_owned(),
        };
        let overflow = || MoneyParseError::Overflow {
            input: trimmed.to_owned(),
        };

        let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise {
                input: trimmed.to_owned(),
            });
        }

        let naira: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let kobo: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        naira
            .checked_mul(KOBO_PER_NAIRA)
            .and_then(|minor| minor.checked_add(kobo))
            .map(Self)
            .ok_or_else(overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "₦0.00")]
    #[case(5, "₦0.05")]
    #[case(100_000, "₦1,000.00")]
    #[case(25_000_000, "₦250,000.00")]
    #[case(123_456_789, "₦1,234,567.89")]
    #[case(-50_050, "-₦500.50")]
    fn displays_grouped_naira(#[case] kobo: i64, #[case] expected: &str) {
        assert_eq!(Money::from_minor(kobo).to_string(), expected);
    }

    #[rstest]
    #[case("500", 50_000)]
    #[case(" 1,250.50 ", 125_050)]
    #[case("₦75.5", 7_550)]
    #[case(".25", 25)]
    #[case("10.", 1_000)]
    fn parses_typed_amounts(#[case] input: &str, #[case] expected_kobo: i64) {
        let amount: Money = input.parse().expect("valid amount");
        assert_eq!(amount.minor_units(), expected_kobo);
    }

    #[rstest]
    #[case("", MoneyParseError::Empty)]
    #[case("  ", MoneyParseError::Empty)]
    #[case("abc", MoneyParseError::Invalid { input: "abc".to_owned() })]
    #[case("-5", MoneyParseError::Invalid { input: "-5".to_owned() })]
    #[case(".", MoneyParseError::Invalid { input: ".".to_owned() })]
    #[case("1.234", MoneyParseError::TooPrecise { input: "1.234".to_owned() })]
    #[case("99999999999999999999", MoneyParseError::Overflow { input: "99999999999999999999".to_owned() })]
    fn rejects_bad_amounts(#[case] input: &str, #[case] expected: MoneyParseError) {
        assert_eq!(input.parse::<Money>(), Err(expected));
    }

    #[rstest]
    fn from_naira_scales_to_kobo() {
        assert_eq!(Money::from_naira(50_000).minor_units(), 5_000_000);
        assert_eq!(
            Money::from_naira(2).checked_add(Money::from_minor(1)),
            Some(Money::from_minor(201))
        );
        assert_eq!(Money::from_minor(i64::MAX).checked_add(Money::from_minor(1)), None);
    }
}
