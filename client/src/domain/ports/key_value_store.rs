//! Driven port for the local key-value storage capability.
//!
//! The store mirrors a browser's local storage: string keys, string values,
//! synchronous access. Draft persistence and the session token cache both
//! sit on top of it.

use super::define_port_error;

define_port_error! {
    /// Errors raised by key-value storage adapters.
    pub enum KeyValueStoreError {
        /// The backing medium could not be reached.
        Unavailable { message: String } => "key-value store unavailable: {message}",
        /// Reading or writing an entry failed.
        Io { key: String, message: String } => "key-value store io failed for {key}: {message}",
    }
}

/// Synchronous string key-value storage.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;

    /// List every stored key.
    fn keys(&self) -> Result<Vec<String>, KeyValueStoreError>;
}
