//! Fixture record types.
//!
//! These types mirror the JSON catalogue one-to-one and stay independent of
//! the client domain types. Enum-like fields are kept as strings here; the
//! client parses them into its own types at the point of use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user returned by every session operation.
///
/// # Example
///
/// ```
/// use fixture_data::FixtureCatalogue;
///
/// let catalogue = FixtureCatalogue::embedded().expect("embedded catalogue");
/// assert_eq!(catalogue.user().tier, "tier2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Stable user identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number in E.164 form.
    pub phone: String,
    /// Wallet balance in minor units.
    pub balance: i64,
    /// Ten-digit account number.
    pub account_number: String,
    /// Account tier name (`tier1`, `tier2`, `tier3`).
    pub tier: String,
    /// Whether identity verification has completed.
    pub is_verified: bool,
}

/// A wallet transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Stable transaction identifier.
    pub id: Uuid,
    /// Direction of the movement (`credit` or `debit`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Human readable description.
    pub description: String,
    /// Counterparty, when one exists.
    #[serde(default)]
    pub recipient: Option<String>,
    /// Provider reference.
    pub reference: String,
    /// When the transaction was recorded.
    pub date: DateTime<Utc>,
    /// Processing status (`pending`, `completed`, `failed`).
    pub status: String,
}

/// A payment card linked to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Card identifier.
    pub id: String,
    /// Masked card number, e.g. `**** **** **** 4532`.
    pub number: String,
    /// Card network (`visa`, `mastercard`, `verve`).
    #[serde(rename = "type")]
    pub network: String,
    /// Expiry in `MM/YY` form.
    pub expiry: String,
    /// Available balance in minor units.
    pub balance: i64,
    /// Whether the card may be used.
    pub is_active: bool,
}

/// A bank available as a transfer destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecord {
    /// Bank sort code.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A country offered in address forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// International dialling prefix.
    pub dial_code: String,
}

/// A first-level subdivision of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Subdivision code.
    pub code: String,
    /// Display name.
    pub name: String,
}
