//! Driving port for wallet data owned by the signed-in user.

use async_trait::async_trait;

use crate::domain::{Card, DomainError, Transaction};

/// Domain use-case port for reading wallet activity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// List recent transactions.
    async fn transactions(&self) -> Result<Vec<Transaction>, DomainError>;

    /// List linked cards.
    async fn cards(&self) -> Result<Vec<Card>, DomainError>;
}
