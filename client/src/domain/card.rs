//! Payment cards linked to the wallet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Money, UnknownValueError};

/// Digits left visible at the end of a masked card number.
pub const VISIBLE_CARD_DIGITS: usize = 4;

/// Validation errors for card fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardValidationError {
    /// The number exposes more than the last four digits.
    #[error("card number must be masked except for the last {visible} digits")]
    Unmasked {
        /// Number of digits allowed to remain visible.
        visible: usize,
    },
    /// Expiry was not `MM/YY` with a month between 01 and 12.
    #[error("card expiry must be MM/YY, got '{input}'")]
    InvalidExpiry {
        /// The rejected input.
        input: String,
    },
}

/// Card network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    /// Visa.
    Visa,
    /// Mastercard.
    Mastercard,
    /// Verve.
    Verve,
}

impl CardNetwork {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Verve => "verve",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardNetwork {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visa" => Ok(Self::Visa),
            "mastercard" => Ok(Self::Mastercard),
            "verve" => Ok(Self::Verve),
            other => Err(UnknownValueError::new("card network", other)),
        }
    }
}

/// Card number with everything but the trailing digits hidden.
///
/// ```
/// use client::domain::MaskedCardNumber;
///
/// let number = MaskedCardNumber::new("**** **** **** 4532").expect("masked");
/// assert_eq!(number.last_four(), "4532");
/// assert!(MaskedCardNumber::new("4111 1111 1111 4532").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaskedCardNumber(String);

impl MaskedCardNumber {
    /// Validate that at most the last four digits are visible.
    pub fn new(value: impl Into<String>) -> Result<Self, CardValidationError> {
        let raw = value.into();
        let digits = raw.chars().filter(char::is_ascii_digit).count();
        let tail_digits = raw
            .chars()
            .rev()
            .take(VISIBLE_CARD_DIGITS)
            .filter(char::is_ascii_digit)
            .count();
        let well_formed = raw.chars().all(|c| c == '*' || c == ' ' || c.is_ascii_digit());
        if !well_formed || digits != VISIBLE_CARD_DIGITS || tail_digits != VISIBLE_CARD_DIGITS {
            return Err(CardValidationError::Unmasked {
                visible: VISIBLE_CARD_DIGITS,
            });
        }
        Ok(Self(raw))
    }

    /// The visible trailing digits.
    pub fn last_four(&self) -> &str {
        let start = self.0.len().saturating_sub(VISIBLE_CARD_DIGITS);
        self.0.get(start..).unwrap_or_default()
    }

    /// Borrow the masked string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<MaskedCardNumber> for String {
    fn from(value: MaskedCardNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for MaskedCardNumber {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Card expiry month and two-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardExpiry {
    month: u8,
    year: u8,
}

impl CardExpiry {
    /// Month, 1 to 12.
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Two-digit year.
    pub const fn year(self) -> u8 {
        self.year
    }
}

impl FromStr for CardExpiry {
    type Err = CardValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardValidationError::InvalidExpiry {
            input: s.to_owned(),
        };
        let (month, year) = s.split_once('/').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.chars().all(|c| c.is_ascii_digit());
        if !two_digits(month) || !two_digits(year) {
            return Err(invalid());
        }
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let year: u8 = year.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { month, year })
    }
}

impl fmt::Display for CardExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

impl From<CardExpiry> for String {
    fn from(value: CardExpiry) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CardExpiry {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A payment card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier.
    pub id: String,
    /// Masked card number.
    pub number: MaskedCardNumber,
    /// Card network.
    #[serde(rename = "type")]
    pub network: CardNetwork,
    /// Expiry date.
    pub expiry: CardExpiry,
    /// Available balance.
    pub balance: Money,
    /// Whether the card may be used.
    pub is_active: bool,
}
