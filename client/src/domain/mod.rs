//! Domain primitives, use-cases, and ports.
//!
//! Purpose: define the typed wallet model shared by screens and backends,
//! the draft and session use-cases built on it, and the ports adapters
//! implement. Nothing here performs IO directly.
//!
//! Public surface:
//! - DomainError / ErrorCode: transport-agnostic failure payload.
//! - User, Transaction, Card, Bank, Country, State: fixture-backed records.
//! - drafts: form draft persistence.
//! - SessionController: token caching, restore, and the logout sweep.
//! - ScreenLifetime: cancellation of calls whose screen has gone.

pub mod drafts;
pub mod ports;

mod auth;
mod card;
mod error;
mod lifetime;
mod money;
mod parse;
mod reference;
mod session;
mod transaction;
mod user;

pub use self::auth::{
    AuthSession, EmptyTokenError, LoginCredentials, LoginValidationError, NewPassword,
    PASSWORD_MIN_LEN, PasswordValidationError, ServiceMessage, SessionToken, SignupRequest,
    looks_like_email,
};
pub use self::card::{
    Card, CardExpiry, CardNetwork, CardValidationError, MaskedCardNumber, VISIBLE_CARD_DIGITS,
};
pub use self::error::{DomainError, ErrorCode, ErrorValidationError};
pub use self::lifetime::{LifetimeHandle, RequestState, ScreenLifetime};
pub use self::money::{Money, MoneyParseError};
pub use self::parse::UnknownValueError;
pub use self::reference::{Bank, Country, CountryCode, CountryCodeError, State};
pub use self::session::{SESSION_TOKEN_KEY, SessionController, SessionState};
pub use self::transaction::{Transaction, TransactionDirection, TransactionStatus};
pub use self::user::{ACCOUNT_NUMBER_LEN, AccountNumber, Tier, User, UserId, UserValidationError};
