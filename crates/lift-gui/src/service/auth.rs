//! Sign-in, registration and sign-out calls.

use lift_api::{ApiClient, ApiError};
use lift_model::{Registration, Session};

pub async fn request_otp(api: ApiClient, email: String) -> Result<(), ApiError> {
    api.request_otp(&email).await
}

/// Exchange the code for a session. The email is filled in from the form
/// when the backend leaves it out.
pub async fn login(api: ApiClient, email: String, otp: String) -> Result<Session, ApiError> {
    let mut session = api.login(&email, &otp).await?;
    if session.email.trim().is_empty() {
        session.email = email;
    }
    Ok(session)
}

pub async fn register(api: ApiClient, form: Registration) -> Result<(), ApiError> {
    api.register(&form).await
}

pub async fn logout(api: ApiClient, session: Session) -> Result<(), ApiError> {
    api.logout(&session).await
}
