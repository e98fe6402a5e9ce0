//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_query;
mod auth_service;
mod key_value_store;
mod reference_data_query;
mod sleeper;

#[cfg(test)]
pub use account_query::MockAccountQuery;
pub use account_query::AccountQuery;
#[cfg(test)]
pub use auth_service::MockAuthService;
pub use auth_service::AuthService;
#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{KeyValueStore, KeyValueStoreError};
#[cfg(test)]
pub use reference_data_query::MockReferenceDataQuery;
pub use reference_data_query::ReferenceDataQuery;
pub use sleeper::{Sleeper, TokioSleeper};
