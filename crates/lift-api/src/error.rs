//! Error types for backend calls.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never got a response (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("server returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or the status reason.
        message: String,
    },

    /// The server answered with `success: false`.
    #[error("{message}")]
    Rejected {
        /// Message supplied by the server.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("could not read server response: {0}")]
    Decode(String),

    /// The configured base URL is unusable.
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The configured URL.
        url: String,
        /// Why it was refused.
        reason: String,
    },
}

impl ApiError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach the LiftCare server. Please check your internet connection."
            }
            Self::Status { status, .. } if *status >= 500 => {
                "The LiftCare server is having trouble. Please try again shortly."
            }
            Self::Status { status: 401 | 403, .. } => {
                "Your session is no longer valid. Please sign in again."
            }
            Self::Status { .. } => "The request could not be completed.",
            Self::Rejected { message } => message,
            Self::Decode(_) => "The server sent a response this app does not understand.",
            Self::InvalidUrl { .. } => "The server address in settings is not valid.",
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Rejected { .. } | Self::Decode(_) | Self::InvalidUrl { .. } => false,
        }
    }

    /// Returns whether the error means the session should be discarded.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_classification() {
        assert!(ApiError::Network("timed out".into()).is_retryable());
        assert!(
            ApiError::Status {
                status: 503,
                message: "down".into()
            }
            .is_retryable()
        );
        assert!(
            !ApiError::Status {
                status: 404,
                message: "missing".into()
            }
            .is_retryable()
        );
        assert!(
            !ApiError::Rejected {
                message: "bad otp".into()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_rejection_shows_server_message() {
        let err = ApiError::Rejected {
            message: "Invalid OTP".into(),
        };
        assert_eq!(err.user_message(), "Invalid OTP");
        assert_eq!(err.to_string(), "Invalid OTP");
    }
}
