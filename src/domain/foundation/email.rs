//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// A syntactically plausible email address, stored trimmed.
///
/// Only structure is checked: one `@`, a non-empty local part, and a
/// dotted domain without empty labels or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and validates an email address for the given field.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if value.len() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::invalid_length(field, 3, MAX_EMAIL_LENGTH, value.len()));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(field, "contains whitespace"));
        }

        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format(field, "missing '@'"))?;

        if local.is_empty() {
            return Err(ValidationError::invalid_format(field, "empty local part"));
        }
        if domain.contains('@') {
            return Err(ValidationError::invalid_format(field, "more than one '@'"));
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(ValidationError::invalid_format(field, "invalid domain"));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, used to detect duplicate invites.
    pub fn same_mailbox(&self, other: &EmailAddress) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse("email", &value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
