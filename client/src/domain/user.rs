//! User data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{Money, UnknownValueError};

/// Validation errors returned by user field constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The identifier was blank.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The account number was not ten digits.
    #[error("account number must be exactly {len} digits")]
    InvalidAccountNumber {
        /// Required number of digits.
        len: usize,
    },
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Required length of an account number.
pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// Ten-digit bank account number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Validate and construct an [`AccountNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = value.into();
        if raw.len() != ACCOUNT_NUMBER_LEN || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(UserValidationError::InvalidAccountNumber {
                len: ACCOUNT_NUMBER_LEN,
            });
        }
        Ok(Self(raw))
    }

    /// Borrow the digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AccountNumber> for String {
    fn from(value: AccountNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Account classification that caps daily spending.
///
/// # Examples
///
/// ```
/// # use client::domain::{Money, Tier};
/// assert_eq!(Tier::Tier1.daily_limit(), Money::from_naira(50_000));
/// assert!(Tier::Tier2.permits(Money::from_naira(150_000)));
/// assert!(!Tier::Tier1.permits(Money::from_naira(50_001)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Basic account with minimal KYC.
    Tier1,
    /// Verified identity.
    Tier2,
    /// Fully verified with address proof.
    Tier3,
}

impl Tier {
    /// Fixed daily spending limit for the tier.
    pub const fn daily_limit(self) -> Money {
        match self {
            Self::Tier1 => Money::from_naira(50_000),
            Self::Tier2 => Money::from_naira(200_000),
            Self::Tier3 => Money::from_naira(5_000_000),
        }
    }

    /// Whether a single spend of `amount` fits inside the daily limit.
    pub fn permits(self, amount: Money) -> bool {
        amount <= self.daily_limit()
    }

    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tier1 => "tier1",
            Self::Tier2 => "tier2",
            Self::Tier3 => "tier3",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tier1" => Ok(Self::Tier1),
            "tier2" => Ok(Self::Tier2),
            "tier3" => Ok(Self::Tier3),
            other => Err(UnknownValueError::new("tier", other)),
        }
    }
}

/// Signed-in application user.
///
/// The mock backend hands out a single fixture user; screens replace the
/// whole value rather than mutating fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Wallet balance.
    pub balance: Money,
    /// Wallet account number.
    pub account_number: AccountNumber,
    /// Account tier.
    pub tier: Tier,
    /// Whether identity verification has completed.
    pub is_verified: bool,
}

impl User {
    /// Given and family name joined for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserValidationError::EmptyId)]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
    #[case("not-a-uuid", UserValidationError::InvalidId)]
    fn user_id_rejects_bad_input(#[case] input: &str, #[case] expected: UserValidationError) {
        assert_eq!(UserId::new(input), Err(expected));
    }

    #[rstest]
    fn user_id_round_trips_through_display() {
        let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    #[case("012345678")]
    #[case("01234567890")]
    #[case("01234-6789")]
    fn account_number_rejects_bad_shapes(#[case] input: &str) {
        assert_eq!(
            AccountNumber::new(input),
            Err(UserValidationError::InvalidAccountNumber { len: 10 })
        );
    }

    #[rstest]
    fn account_number_deserialises_with_validation() {
        let ok: AccountNumber = serde_json::from_str("\"0123456789\"").expect("valid");
        assert_eq!(ok.as_str(), "0123456789");
        assert!(serde_json::from_str::<AccountNumber>("\"12\"").is_err());
    }

    #[rstest]
    #[case(Tier::Tier1, 5_000_000)]
    #[case(Tier::Tier2, 20_000_000)]
    #[case(Tier::Tier3, 500_000_000)]
    fn tier_limits_are_fixed(#[case] tier: Tier, #[case] expected_kobo: i64) {
        assert_eq!(tier.daily_limit().minor_units(), expected_kobo);
        assert_eq!(tier.as_str().parse::<Tier>(), Ok(tier));
    }

    #[rstest]
    fn unknown_tier_is_rejected() {
        let err = "gold".parse::<Tier>().expect_err("unknown tier");
        assert_eq!(err.to_string(), "unknown tier: gold");
    }
}
