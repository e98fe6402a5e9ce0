//! Fixture catalogue types and JSON parsing.
//!
//! The catalogue holds every canned response the mock backend serves. It is
//! loaded from JSON, either the copy embedded in this crate or a file
//! supplied at runtime, and validated before use.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogueError;
use crate::records::{
    BankRecord, CardRecord, CountryRecord, StateRecord, TransactionRecord, UserRecord,
};
use crate::validation::{is_masked_card_number, is_valid_account_number};

/// Current supported catalogue version.
const SUPPORTED_VERSION: u32 = 1;

const EMBEDDED_CATALOGUE: &str = include_str!("../fixtures/catalogue.json");

/// Validated set of fixture records.
///
/// # Example
///
/// ```
/// use fixture_data::FixtureCatalogue;
///
/// let catalogue = FixtureCatalogue::embedded().expect("embedded catalogue");
/// assert_eq!(catalogue.states_for("NG").len(), 10);
/// assert!(catalogue.states_for("US").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCatalogue {
    version: u32,
    token: String,
    user: UserRecord,
    transactions: Vec<TransactionRecord>,
    cards: Vec<CardRecord>,
    banks: Vec<BankRecord>,
    countries: Vec<CountryRecord>,
    states: BTreeMap<String, Vec<StateRecord>>,
}

impl FixtureCatalogue {
    /// Parses the catalogue compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the embedded JSON fails validation,
    /// which indicates the fixture file was edited incorrectly.
    pub fn embedded() -> Result<Self, CatalogueError> {
        Self::from_json(EMBEDDED_CATALOGUE)
    }

    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - Any record breaks a shape rule
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CatalogueError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogueError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawCatalogue) -> Result<Self, CatalogueError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.token.trim().is_empty() {
            return Err(CatalogueError::EmptyToken);
        }

        if !is_valid_account_number(&raw.user.account_number) {
            return Err(CatalogueError::InvalidAccountNumber {
                value: raw.user.account_number,
            });
        }

        let mut seen = HashSet::with_capacity(raw.transactions.len());
        for (index, transaction) in raw.transactions.iter().enumerate() {
            if !seen.insert(transaction.id) {
                return Err(CatalogueError::DuplicateTransactionId {
                    index,
                    id: transaction.id.to_string(),
                });
            }
        }

        if let Some(index) = raw
            .cards
            .iter()
            .position(|card| !is_masked_card_number(&card.number))
        {
            return Err(CatalogueError::UnmaskedCardNumber { index });
        }

        // State lists must hang off a known country.
        if let Some(code) = raw
            .states
            .keys()
            .find(|code| !raw.countries.iter().any(|c| &c.code == *code))
        {
            return Err(CatalogueError::UnknownStateCountry { code: code.clone() });
        }

        Ok(Self {
            version: raw.version,
            token: raw.token,
            user: raw.user,
            transactions: raw.transactions,
            cards: raw.cards,
            banks: raw.banks,
            countries: raw.countries,
            states: raw.states,
        })
    }

    /// Returns the catalogue version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the opaque session token handed out on login and signup.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the fixture user.
    #[must_use]
    pub const fn user(&self) -> &UserRecord {
        &self.user
    }

    /// Returns the fixture transactions, newest last.
    #[must_use]
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Returns the fixture cards.
    #[must_use]
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Returns the bank list.
    #[must_use]
    pub fn banks(&self) -> &[BankRecord] {
        &self.banks
    }

    /// Returns the country list.
    #[must_use]
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Returns the states for `country_code`, or an empty slice when the
    /// catalogue lists none.
    #[must_use]
    pub fn states_for(&self, country_code: &str) -> &[StateRecord] {
        self.states
            .get(country_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Appends generated history after the fixture transactions.
    pub fn extend_transactions(&mut self, extra: impl IntoIterator<Item = TransactionRecord>) {
        self.transactions.extend(extra);
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalogue {
    version: u32,
    token: String,
    user: UserRecord,
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
    #[serde(default)]
    cards: Vec<CardRecord>,
    #[serde(default)]
    banks: Vec<BankRecord>,
    #[serde(default)]
    countries: Vec<CountryRecord>,
    #[serde(default)]
    states: BTreeMap<String, Vec<StateRecord>>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn embedded_catalogue_is_valid() {
        let catalogue = FixtureCatalogue::embedded().expect("embedded catalogue parses");

        assert_eq!(catalogue.version(), 1);
        assert!(!catalogue.token().is_empty());
        assert_eq!(catalogue.transactions().len(), 6);
        assert_eq!(catalogue.cards().len(), 3);
        assert_eq!(catalogue.banks().len(), 10);
        assert_eq!(catalogue.countries().len(), 6);
    }

    #[rstest]
    #[case("NG", 10)]
    #[case("US", 0)]
    #[case("ng", 0)]
    #[case("", 0)]
    fn states_are_keyed_by_exact_country_code(#[case] code: &str, #[case] expected: usize) {
        let catalogue = FixtureCatalogue::embedded().expect("embedded catalogue parses");
        assert_eq!(catalogue.states_for(code).len(), expected);
    }

    #[rstest]
    fn extend_transactions_appends_after_fixtures() {
        let mut catalogue = FixtureCatalogue::embedded().expect("embedded catalogue parses");
        let first = catalogue
            .transactions()
            .first()
            .cloned()
            .expect("fixture transactions");
        let mut extra = first.clone();
        extra.id = uuid::Uuid::nil();

        catalogue.extend_transactions([extra.clone()]);

        assert_eq!(catalogue.transactions().len(), 7);
        assert_eq!(catalogue.transactions().last(), Some(&extra));
        assert_eq!(catalogue.transactions().first(), Some(&first));
    }
}
