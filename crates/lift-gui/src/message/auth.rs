//! Sign-in and registration messages.

use lift_api::ApiError;
use lift_model::Session;

use crate::state::RegistrationField;

#[derive(Debug, Clone)]
pub enum AuthMessage {
    EmailChanged(String),
    /// Request a one-time password for the entered email.
    SendOtp,
    OtpSent(Result<(), ApiError>),
    OtpChanged(String),
    VerifyOtp,
    ResendOtp,
    LoggedIn(Result<Session, ApiError>),
    RegistrationChanged(RegistrationField, String),
    SubmitRegistration,
    Registered(Result<(), ApiError>),
}
