//! Driving port for lookup lists shown in pickers.

use async_trait::async_trait;

use crate::domain::{Bank, Country, DomainError, State};

/// Domain use-case port for static reference data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceDataQuery: Send + Sync {
    /// Banks available as transfer destinations.
    async fn banks(&self) -> Result<Vec<Bank>, DomainError>;

    /// Countries offered in address forms.
    async fn countries(&self) -> Result<Vec<Country>, DomainError>;

    /// First-level subdivisions for `country_code`, matched exactly as
    /// given. Unknown or malformed codes yield an empty list, never an error.
    async fn states(&self, country_code: &str) -> Result<Vec<State>, DomainError>;
}
