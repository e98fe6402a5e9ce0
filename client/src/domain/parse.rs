//! Shared parse error for string-backed enums.

use thiserror::Error;

/// Raised when a wire string does not name a known variant.
///
/// # Examples
/// ```
/// use client::domain::UnknownValueError;
///
/// let err = UnknownValueError::new("status", "lost");
/// assert_eq!(err.to_string(), "unknown status: lost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field}: {input}")]
pub struct UnknownValueError {
    field: &'static str,
    input: String,
}

impl UnknownValueError {
    /// Record the field being parsed and the rejected input.
    pub fn new(field: &'static str, input: impl Into<String>) -> Self {
        Self {
            field,
            input: input.into(),
        }
    }

    /// Name of the field being parsed.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}
