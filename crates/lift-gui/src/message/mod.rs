//! Message module for LiftCare.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and backend results flow through these types.

pub mod account;
pub mod auth;
pub mod complaint;
pub mod data;

use std::any::Any;

use lift_api::ApiError;
use lift_model::Route;
use lift_nav::Payload;

use crate::component::ToastMessage;

pub use account::AccountMessage;
pub use auth::AuthMessage;
pub use complaint::ComplaintMessage;
pub use data::DataMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Go to `path`, optionally handing `data` to the destination screen.
    Navigate { path: String, data: Option<Payload> },

    /// Ask for confirmation before signing out.
    RequestLogout,

    /// Close the sign-out confirmation.
    CancelLogout,

    /// Sign out now.
    Logout,

    /// Server-side logout finished.
    LogoutComplete(Result<(), ApiError>),

    // =========================================================================
    // Screen messages
    // =========================================================================
    Auth(AuthMessage),
    Data(DataMessage),
    Complaint(ComplaintMessage),
    Account(AccountMessage),

    // =========================================================================
    // Feedback
    // =========================================================================
    Toast(ToastMessage),

    /// Close the error modal.
    DismissError,

    /// Escape pressed.
    EscapePressed,

    /// No-op message for placeholder handlers.
    Noop,
}

impl Message {
    /// Navigate to `route` without data.
    pub fn go(route: Route) -> Self {
        Self::Navigate {
            path: route.path(),
            data: None,
        }
    }

    /// Navigate to `route`, handing `value` to the destination.
    pub fn go_with<T: Any + Send + Sync>(route: Route, value: T) -> Self {
        Self::Navigate {
            path: route.path(),
            data: Some(Payload::new(value)),
        }
    }
}
