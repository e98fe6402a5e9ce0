//! Wallet transactions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Money, UnknownValueError};

/// Whether money entered or left the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    /// Money received.
    Credit,
    /// Money spent or sent.
    Debit,
}

impl TransactionDirection {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl FromStr for TransactionDirection {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            other => Err(UnknownValueError::new("transaction type", other)),
        }
    }
}

impl fmt::Display for TransactionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Submitted but not settled.
    Pending,
    /// Settled successfully.
    Completed,
    /// Rejected or reversed.
    Failed,
}

impl TransactionStatus {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(UnknownValueError::new("transaction status", other)),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single movement of money on the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Stable identifier.
    pub id: Uuid,
    /// Credit or debit.
    #[serde(rename = "type")]
    pub direction: TransactionDirection,
    /// Amount moved.
    pub amount: Money,
    /// Human readable description.
    pub description: String,
    /// Counterparty, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    /// Provider reference.
    pub reference: String,
    /// When the transaction was recorded.
    pub date: DateTime<Utc>,
    /// Processing status.
    pub status: TransactionStatus,
}

impl Transaction {
    /// Amount with its sign applied: credits positive, debits negative.
    pub const fn signed_amount(&self) -> Money {
        match self.direction {
            TransactionDirection::Credit => self.amount,
            TransactionDirection::Debit => Money::from_minor(self.amount.minor_units().saturating_neg()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("credit", TransactionDirection::Credit)]
    #[case("debit", TransactionDirection::Debit)]
    fn parses_directions(#[case] raw: &str, #[case] expected: TransactionDirection) {
        assert_eq!(raw.parse::<TransactionDirection>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("pending", TransactionStatus::Pending)]
    #[case("completed", TransactionStatus::Completed)]
    #[case("failed", TransactionStatus::Failed)]
    fn parses_statuses(#[case] raw: &str, #[case] expected: TransactionStatus) {
        assert_eq!(raw.parse::<TransactionStatus>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_status() {
        let err = "Completed".parse::<TransactionStatus>().expect_err("case sensitive");
        assert_eq!(err.field(), "transaction status");
        assert_eq!(err.input(), "Completed");
    }

    #[rstest]
    fn serialises_direction_as_type() {
        let transaction = Transaction {
            id: Uuid::nil(),
            direction: TransactionDirection::Debit,
            amount: Money::from_minor(500_000),
            description: "Transfer".to_owned(),
            recipient: None,
            reference: "TRX1".to_owned(),
            date: DateTime::<Utc>::UNIX_EPOCH,
            status: TransactionStatus::Completed,
        };

        let value = serde_json::to_value(&transaction).expect("serialise");
        assert_eq!(value["type"], "debit");
        assert_eq!(value["amount"], 500_000);
        assert!(value.get("recipient").is_none());
        assert_eq!(transaction.signed_amount(), Money::from_minor(-500_000));
    }
}
