//! Conversion from fixture catalogue records to domain types.

use std::collections::BTreeMap;

use fixture_data::{
    BankRecord, CardRecord, CountryRecord, FixtureCatalogue, StateRecord, TransactionRecord,
    UserRecord,
};
use thiserror::Error;

use crate::domain::{
    AccountNumber, AuthSession, Bank, Card, CardExpiry, CardNetwork, Country, CountryCode,
    MaskedCardNumber, Money, SessionToken, State, Transaction, TransactionDirection,
    TransactionStatus, User, UserId,
};

/// A fixture record that does not fit the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fixture {record} has invalid {field}: {message}")]
pub struct FixtureMappingError {
    record: String,
    field: &'static str,
    message: String,
}

impl FixtureMappingError {
    fn new(record: impl Into<String>, field: &'static str, message: impl ToString) -> Self {
        Self {
            record: record.into(),
            field,
            message: message.to_string(),
        }
    }
}

impl TryFrom<&UserRecord> for User {
    type Error = FixtureMappingError;

    fn try_from(record: &UserRecord) -> Result<Self, Self::Error> {
        let invalid = |field, err| FixtureMappingError::new("user", field, err);
        Ok(Self {
            id: UserId::from(record.id),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            balance: Money::from_minor(record.balance),
            account_number: AccountNumber::new(record.account_number.clone())
                .map_err(|err| invalid("accountNumber", err.to_string()))?,
            tier: record
                .tier
                .parse()
                .map_err(|err: crate::domain::UnknownValueError| invalid("tier", err.to_string()))?,
            is_verified: record.is_verified,
        })
    }
}

impl TryFrom<&TransactionRecord> for Transaction {
    type Error = FixtureMappingError;

    fn try_from(record: &TransactionRecord) -> Result<Self, Self::Error> {
        let label = format!("transaction {}", record.id);
        let direction: TransactionDirection = record
            .kind
            .parse()
            .map_err(|err| FixtureMappingError::new(label.as_str(), "type", err))?;
        let status: TransactionStatus = record
            .status
            .parse()
            .map_err(|err| FixtureMappingError::new(label.as_str(), "status", err))?;
        Ok(Self {
            id: record.id,
            direction,
            amount: Money::from_minor(record.amount),
            description: record.description.clone(),
            recipient: record.recipient.clone(),
            reference: record.reference.clone(),
            date: record.date,
            status,
        })
    }
}

impl TryFrom<&CardRecord> for Card {
    type Error = FixtureMappingError;

    fn try_from(record: &CardRecord) -> Result<Self, Self::Error> {
        let label = format!("card {}", record.id);
        let network: CardNetwork = record
            .network
            .parse()
            .map_err(|err| FixtureMappingError::new(label.as_str(), "type", err))?;
        let expiry: CardExpiry = record
            .expiry
            .parse()
            .map_err(|err| FixtureMappingError::new(label.as_str(), "expiry", err))?;
        let number = MaskedCardNumber::new(record.number.clone())
            .map_err(|err| FixtureMappingError::new(label.as_str(), "number", err))?;
        Ok(Self {
            id: record.id.clone(),
            number,
            network,
            expiry,
            balance: Money::from_minor(record.balance),
            is_active: record.is_active,
        })
    }
}

impl From<&BankRecord> for Bank {
    fn from(record: &BankRecord) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
        }
    }
}

impl TryFrom<&CountryRecord> for Country {
    type Error = FixtureMappingError;

    fn try_from(record: &CountryRecord) -> Result<Self, Self::Error> {
        let code = CountryCode::new(&record.code).map_err(|err| {
            FixtureMappingError::new(format!("country {}", record.name), "code", err)
        })?;
        Ok(Self {
            code,
            name: record.name.clone(),
            dial_code: record.dial_code.clone(),
        })
    }
}

impl From<&StateRecord> for State {
    fn from(record: &StateRecord) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
        }
    }
}

/// Every canned response, converted once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    /// Session returned by login and signup.
    pub session: AuthSession,
    /// Transaction history.
    pub transactions: Vec<Transaction>,
    /// Linked cards.
    pub cards: Vec<Card>,
    /// Bank list.
    pub banks: Vec<Bank>,
    /// Country list.
    pub countries: Vec<Country>,
    /// States keyed by country; countries without an entry have none.
    pub states: BTreeMap<CountryCode, Vec<State>>,
}

impl FixtureSet {
    /// Convert a validated catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureMappingError`] when a record holds a value the domain
    /// rejects, such as an unknown tier or card network.
    pub fn from_catalogue(catalogue: &FixtureCatalogue) -> Result<Self, FixtureMappingError> {
        let token = SessionToken::new(catalogue.token())
            .map_err(|err| FixtureMappingError::new("catalogue", "token", err))?;
        let user = User::try_from(catalogue.user())?;
        let transactions = catalogue
            .transactions()
            .iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let cards = catalogue
            .cards()
            .iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let banks = catalogue.banks().iter().map(Bank::from).collect();
        let countries = catalogue
            .countries()
            .iter()
            .map(Country::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut states = BTreeMap::new();
        for (record, country) in catalogue.countries().iter().zip(&countries) {
            let list: Vec<State> = catalogue
                .states_for(&record.code)
                .iter()
                .map(State::from)
                .collect();
            if !list.is_empty() {
                states.insert(country.code.clone(), list);
            }
        }

        Ok(Self {
            session: AuthSession { user, token },
            transactions,
            cards,
            banks,
            countries,
            states,
        })
    }

    /// States listed under exactly `country_code`, empty otherwise.
    ///
    /// Matching is case-sensitive and never validates the input, so `"ng"`
    /// and `"NGA"` both yield nothing.
    pub fn states_for(&self, country_code: &str) -> Vec<State> {
        self.states
            .iter()
            .find(|(code, _)| code.as_str() == country_code)
            .map(|(_, states)| states.clone())
            .unwrap_or_default()
    }
}
