//! Validation errors for user-entered forms.

use thiserror::Error;

/// Errors raised while validating forms before they are sent to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// A required field was empty.
    #[error("{field} is required")]
    MissingField {
        /// Human-readable field name.
        field: &'static str,
    },

    /// The email address is not shaped like `local@domain.tld`.
    #[error("'{value}' is not a valid email address")]
    InvalidEmail {
        /// The rejected input.
        value: String,
    },

    /// The phone number has too few or too many digits.
    #[error("'{value}' is not a valid phone number")]
    InvalidPhone {
        /// The rejected input.
        value: String,
    },

    /// A field exceeded its maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Human-readable field name.
        field: &'static str,
        /// Maximum accepted length in characters.
        max: usize,
    },
}

/// Result type for model validation.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Require a non-blank value.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ModelError::MissingField { field })
    } else {
        Ok(())
    }
}

/// Enforce a maximum length in characters.
pub(crate) fn max_len(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        Err(ModelError::TooLong { field, max })
    } else {
        Ok(())
    }
}

/// Validate an email address.
///
/// Accepts `local@domain.tld` with a non-empty local part and a dot inside
/// the domain that is neither its first nor last character.
pub fn validate_email(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::MissingField { field: "Email" });
    }
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !trimmed.contains(char::is_whitespace)
                && domain
                    .find('.')
                    .is_some_and(|dot| dot > 0 && !domain.ends_with('.'))
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ModelError::InvalidEmail {
            value: trimmed.to_string(),
        })
    }
}

/// Validate a phone number: 7 to 15 digits, optionally with `+`, spaces,
/// dashes and parentheses.
pub fn validate_phone(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::MissingField { field: "Phone" });
    }
    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if allowed && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(ModelError::InvalidPhone {
            value: trimmed.to_string(),
        })
    }
}
