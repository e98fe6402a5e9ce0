//! Authentication primitives: credentials, sessions, and password resets.
//!
//! Credentials are accepted as typed so the mock backend can honour "any
//! input logs in"; screens call the `validate` helpers first to produce the
//! inline errors users see.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

use super::User;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Returns `true` when `email` looks like an address.
///
/// # Examples
/// ```
/// use client::domain::looks_like_email;
///
/// assert!(looks_like_email("ada@example.com"));
/// assert!(!looks_like_email("ada@example"));
/// ```
pub fn looks_like_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Client-side login validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email did not look like an address.
    #[error("email must be a valid address")]
    MalformedEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Login credentials as typed by the user.
///
/// ## Invariants
/// - `email` is trimmed.
/// - `password` retains caller-provided whitespace and is zeroed on drop.
///
/// # Examples
/// ```
/// use client::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new("  ada@example.com ", "secret");
/// assert_eq!(creds.email(), "ada@example.com");
/// assert!(creds.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture credentials without judging them.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: Zeroizing::new(password.to_owned()),
        }
    }

    /// Email string used for lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Apply the login screen's inline checks.
    pub fn validate(&self) -> Result<(), LoginValidationError> {
        if self.email.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if !looks_like_email(&self.email) {
            return Err(LoginValidationError::MalformedEmail);
        }
        if self.password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(())
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up form submission. Supplied fields override the fixture profile.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupRequest {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Chosen password.
    pub password: Zeroizing<String>,
}

impl SignupRequest {
    /// Copy every supplied field onto `user`, leaving the rest untouched.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(first_name) = &self.first_name {
            first_name.clone_into(&mut user.first_name);
        }
        if let Some(last_name) = &self.last_name {
            last_name.clone_into(&mut user.last_name);
        }
        if let Some(email) = &self.email {
            email.clone_into(&mut user.email);
        }
        if let Some(phone) = &self.phone {
            phone.clone_into(&mut user.phone);
        }
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token issued on login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionToken(String);

/// Raised when a token is blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("session token must not be empty")]
pub struct EmptyTokenError;

impl SessionToken {
    /// Validate and wrap a token.
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyTokenError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(EmptyTokenError);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw token.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

impl From<SessionToken> for String {
    fn from(value: SessionToken) -> Self {
        value.0
    }
}

impl TryFrom<String> for SessionToken {
    type Error = EmptyTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Result of a successful login or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The signed-in user.
    pub user: User,
    /// Bearer token for later calls.
    pub token: SessionToken,
}

/// Canned acknowledgement returned by password flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMessage {
    /// Text shown in the success banner.
    pub message: String,
}

impl ServiceMessage {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Client-side password reset validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordValidationError {
    /// Password shorter than the minimum.
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Minimum number of characters.
        min: usize,
    },
    /// Confirmation did not match.
    #[error("passwords do not match")]
    Mismatch,
}

/// A new password that passed the reset screen's checks.
///
/// # Examples
/// ```
/// use client::domain::{NewPassword, PasswordValidationError};
///
/// assert!(NewPassword::try_from_parts("longenough", "longenough").is_ok());
/// assert_eq!(
///     NewPassword::try_from_parts("longenough", "different").unwrap_err(),
///     PasswordValidationError::Mismatch,
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword(Zeroizing<String>);

impl NewPassword {
    /// Validate a password against its confirmation.
    pub fn try_from_parts(
        password: &str,
        confirmation: &str,
    ) -> Result<Self, PasswordValidationError> {
        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(PasswordValidationError::TooShort {
                min: PASSWORD_MIN_LEN,
            });
        }
        if password != confirmation {
            return Err(PasswordValidationError::Mismatch);
        }
        Ok(Self(Zeroizing::new(password.to_owned())))
    }

    /// Borrow the password.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NewPassword(<redacted>)")
    }
}
