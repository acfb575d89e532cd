//! The response envelope shared by every endpoint.

use serde::Deserialize;

use crate::error::{ApiError, Result};

/// `{ "success": bool, "message": string?, "data": T? }`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server accepted the request. Missing means accepted.
    #[serde(default = "default_success")]
    pub success: bool,

    /// Human-readable status message.
    #[serde(default)]
    pub message: Option<String>,

    /// Endpoint-specific result. Missing reads as `None`.
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> Envelope<T> {
    /// Turn `success: false` into [`ApiError::Rejected`].
    pub fn accepted(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected {
                message: self
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "The request was rejected.".to_string()),
            })
        }
    }

    /// Take the data, failing if the server sent none.
    pub fn into_data(self) -> Result<T> {
        self.data
            .ok_or_else(|| ApiError::Decode("response carried no data".to_string()))
    }
}

impl<T: Default> Envelope<T> {
    /// Take the data, treating a missing value as empty.
    pub fn into_data_or_default(self) -> T {
        self.data.unwrap_or_default()
    }
}
