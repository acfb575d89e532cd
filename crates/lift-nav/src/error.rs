//! Navigation errors.

use lift_model::RouteParseError;
use thiserror::Error;

/// Errors raised by the navigation context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NavError {
    /// The requested path is not a known route. Nothing was changed.
    #[error("cannot navigate to '{path}'")]
    InvalidRoute {
        path: String,
        #[source]
        source: RouteParseError,
    },

    /// The navigation context was requested where no provider is mounted.
    #[error("navigation context used outside of a NavigationProvider")]
    OutsideProvider,
}

impl NavError {
    /// The offending path, for invalid routes.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidRoute { path, .. } => Some(path),
            Self::OutsideProvider => None,
        }
    }
}
