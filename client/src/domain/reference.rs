//! Lookup lists used by address and transfer forms.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a country code is not two ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("country code must be two letters, got '{input}'")]
pub struct CountryCodeError {
    input: String,
}

/// ISO 3166-1 alpha-2 country code, stored upper case.
///
/// ```
/// use client::domain::CountryCode;
///
/// let code = CountryCode::new("ng").expect("valid code");
/// assert_eq!(code.as_str(), "NG");
/// assert!(CountryCode::new("NGA").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Validate and normalise a country code.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CountryCodeError> {
        let raw = value.as_ref();
        if raw.len() != 2 || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryCodeError {
                input: raw.to_owned(),
            });
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Borrow the code.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A bank offered as a transfer destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    /// Bank sort code.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A country offered in address forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Country code.
    pub code: CountryCode,
    /// Display name.
    pub name: String,
    /// International dialling prefix, such as `+234`.
    pub dial_code: String,
}

/// A first-level subdivision of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Subdivision code.
    pub code: String,
    /// Display name.
    pub name: String,
}
