//! GUI-specific error types.
//!
//! Errors from the backend client, navigation and form validation are turned
//! into a [`GuiError`] before they reach the screen, which decides between a
//! toast and the error modal.

use lift_api::ApiError;
use lift_model::ModelError;
use lift_nav::NavError;
use thiserror::Error;

/// GUI-specific errors.
///
/// # Display Behavior
///
/// - **Transient**: shown as a toast that auto-dismisses
/// - **Modal**: everything else, shown in the error modal until dismissed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// A backend call failed.
    #[error("{operation} failed: {message}")]
    Request {
        /// What the user was doing.
        operation: String,
        /// User-facing description.
        message: String,
        /// Whether trying again may help.
        retryable: bool,
    },

    /// The backend no longer accepts the session.
    #[error("Your session has expired")]
    SessionExpired,

    /// The action needs a signed-in user.
    #[error("You need to sign in first")]
    NotSignedIn,

    /// A form failed validation.
    #[error("{message}")]
    Validation {
        /// Which field is wrong and how.
        message: String,
    },

    /// A navigation request was refused.
    #[error("Navigation failed: {message}")]
    Navigation {
        /// Description of the refused request.
        message: String,
    },

    /// The backend address in the settings is unusable.
    #[error("Server address is not valid: {reason}")]
    Configuration {
        /// Why it was refused.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create a request error for a failed backend call.
    pub fn request(operation: impl Into<String>, err: &ApiError) -> Self {
        match err {
            ApiError::InvalidUrl { reason, .. } => Self::Configuration {
                reason: reason.clone(),
            },
            err if err.is_unauthorized() => Self::SessionExpired,
            err => Self::Request {
                operation: operation.into(),
                message: err.user_message().to_string(),
                retryable: err.is_retryable(),
            },
        }
    }

    /// Check if this error should be shown as a transient toast notification.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Request {
                retryable: true,
                ..
            }
        )
    }

    /// Check if this error blocks every backend call until fixed.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Title for the error modal.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Request { .. } => "Request Failed",
            Self::SessionExpired | Self::NotSignedIn => "Signed Out",
            Self::Validation { .. } => "Check Your Input",
            Self::Navigation { .. } => "Navigation Error",
            Self::Configuration { .. } | Self::SettingsSave { .. } => "Settings Problem",
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Request {
                retryable: true, ..
            } => Some("Check your connection and try again."),
            Self::Request { .. } => None,
            Self::SessionExpired | Self::NotSignedIn => Some("Sign in again to continue."),
            Self::Validation { .. } | Self::Navigation { .. } => None,
            Self::Configuration { .. } => {
                Some("Fix the [api] base_url entry in settings.toml and restart the app.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
        }
    }
}

impl From<ApiError> for GuiError {
    fn from(err: ApiError) -> Self {
        Self::request("Request", &err)
    }
}

impl From<NavError> for GuiError {
    fn from(err: NavError) -> Self {
        Self::Navigation {
            message: err.to_string(),
        }
    }
}

impl From<ModelError> for GuiError {
    fn from(err: ModelError) -> Self {
        Self::Validation {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_becomes_session_expired() {
        let err = ApiError::Status {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert_eq!(GuiError::request("Load complaints", &err), GuiError::SessionExpired);
    }

    #[test]
    fn test_network_errors_are_transient() {
        let err = GuiError::request("Load invoices", &ApiError::Network("timeout".into()));
        assert!(err.is_transient());
        assert_eq!(
            err.to_string(),
            "Load invoices failed: Could not reach the LiftCare server. Please check your internet connection."
        );
    }

    #[test]
    fn test_bad_url_blocks() {
        let err: GuiError = ApiError::InvalidUrl {
            url: "x".into(),
            reason: "relative URL without a base".into(),
        }
        .into();
        assert!(err.is_blocking());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_validation_from_model() {
        let err: GuiError = ModelError::MissingField { field: "Subject" }.into();
        assert_eq!(err.to_string(), "Subject is required");
        assert!(err.is_transient());
    }
}
