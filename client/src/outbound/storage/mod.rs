//! Key-value storage adapters.

mod file;
mod in_memory;

pub use file::{FileKeyValueStore, MAX_KEY_LEN};
pub use in_memory::InMemoryKeyValueStore;
