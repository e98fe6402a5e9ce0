//! Static fixture catalogue for the client mock backend.
//!
//! This crate owns every canned response the mock backend serves: the
//! signed-in user, transactions, cards, and the bank, country, and state
//! lookup lists. It is independent of client domain types so the client can
//! convert records at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Parsing and validating the catalogue embedded at compile time
//! - Loading replacement catalogues from JSON files
//! - Deterministic generation of extra transaction history from a seed
//!
//! # Example
//!
//! ```
//! use fixture_data::FixtureCatalogue;
//!
//! let catalogue = FixtureCatalogue::embedded().expect("embedded catalogue");
//!
//! assert_eq!(catalogue.user().account_number, "0123456789");
//! assert_eq!(catalogue.banks().len(), 10);
//! ```

mod catalogue;
mod error;
mod generator;
mod records;
mod validation;

pub use catalogue::FixtureCatalogue;
pub use error::{CatalogueError, GenerationError};
pub use generator::{MAX_HISTORY_LEN, generate_transaction_history};
pub use records::{
    BankRecord, CardRecord, CountryRecord, StateRecord, TransactionRecord, UserRecord,
};
pub use validation::{
    ACCOUNT_NUMBER_LEN, VISIBLE_CARD_DIGITS, is_masked_card_number, is_valid_account_number,
};
