//! Storage keys for persisted drafts.
use std::fmt;

use thiserror::Error;

/// Prefix shared by every draft key; the logout sweep deletes by it.
pub const DRAFT_KEY_PREFIX: &str = "form_";

/// Longest accepted form name, in bytes.
pub const FORM_NAME_MAX_LEN: usize = 64;

/// Name identifying one form's draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormName(String);

impl FormName {
    /// Construct a form name after validating that it is non-empty, trimmed,
    /// and at most [`FORM_NAME_MAX_LEN`] bytes.
    pub fn new(value: impl Into<String>) -> Result<Self, FormNameValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(FormNameValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(FormNameValidationError::ContainsWhitespace);
        }
        if raw.len() > FORM_NAME_MAX_LEN {
            return Err(FormNameValidationError::TooLong {
                len: raw.len(),
                max: FORM_NAME_MAX_LEN,
            });
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Namespaced storage key for this form's draft.
    pub fn draft_key(&self) -> DraftKey {
        DraftKey(format!("{DRAFT_KEY_PREFIX}{}", self.0))
    }
}

impl fmt::Display for FormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FormName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validation errors returned when constructing [`FormName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormNameValidationError {
    /// Name is empty after trimming whitespace.
    #[error("form name must not be empty")]
    Empty,
    /// Name has leading or trailing whitespace.
    #[error("form name must not contain surrounding whitespace")]
    ContainsWhitespace,
    /// Name is longer than [`FORM_NAME_MAX_LEN`] bytes.
    #[error("form name is {len} bytes; at most {max} allowed")]
    TooLong {
        /// Length of the rejected name.
        len: usize,
        /// Upper bound.
        max: usize,
    },
}

/// A key under [`DRAFT_KEY_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraftKey(String);

impl DraftKey {
    /// Borrow the full key.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether `key` belongs to the draft namespace.
    pub fn is_draft_key(key: &str) -> bool {
        key.starts_with(DRAFT_KEY_PREFIX)
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
