//! Error types for the fixture-data crate.
//!
//! Catalogue parsing and history generation fail with semantic enums built
//! on `thiserror`, matching the error conventions used across the workspace.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a fixture catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue file at '{path}': {message}")]
    IoError {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the catalogue.
        actual: u32,
    },

    /// The session token is blank.
    #[error("catalogue token must not be empty")]
    EmptyToken,

    /// The fixture user's account number is not ten digits.
    #[error("invalid account number: {value}")]
    InvalidAccountNumber {
        /// The rejected account number.
        value: String,
    },

    /// Two transactions share an identifier.
    #[error("duplicate transaction id at index {index}: {id}")]
    DuplicateTransactionId {
        /// Index of the second occurrence.
        index: usize,
        /// The repeated identifier.
        id: String,
    },

    /// A card number is not masked down to its last four digits.
    #[error("card at index {index} exposes an unmasked number")]
    UnmaskedCardNumber {
        /// Index of the offending card.
        index: usize,
    },

    /// States are listed for a country that is not in the country list.
    #[error("states listed for unknown country '{code}'")]
    UnknownStateCountry {
        /// Country code used as the states key.
        code: String,
    },
}

/// Errors raised while generating demo transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// More entries were requested than the generator allows.
    #[error("requested {requested} history entries but at most {max} are allowed")]
    HistoryTooLong {
        /// Upper bound on generated entries.
        max: usize,
        /// Number of entries requested.
        requested: usize,
    },
}
