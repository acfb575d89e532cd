//! Sign-in and registration handler.

use iced::Task;
use lift_model::Route;
use lift_model::error::validate_email;
use lift_nav::Payload;
use tracing::{debug, info};

use crate::handler::MessageHandler;
use crate::message::{AuthMessage, Message};
use crate::service;
use crate::state::{AppState, OTP_LENGTH, OtpRequest};

/// Handler for [`AuthMessage`].
pub struct AuthHandler;

impl MessageHandler<AuthMessage> for AuthHandler {
    fn handle(&self, state: &mut AppState, msg: AuthMessage) -> Task<Message> {
        match msg {
            AuthMessage::EmailChanged(email) => {
                state.auth.email = email;
                state.auth.error = None;
                Task::none()
            }

            AuthMessage::SendOtp | AuthMessage::ResendOtp => send_otp(state),

            AuthMessage::OtpSent(result) => {
                state.auth.sending = false;
                match result {
                    Ok(()) => {
                        let email = state.auth.email.trim().to_string();
                        state.auth.otp.clear();
                        state.toast_info(format!("A code was sent to {email}"));
                        state
                            .nav()
                            .navigate_route(Route::Otp, Some(Payload::new(OtpRequest { email })));
                    }
                    Err(err) => state.auth.error = Some(err.user_message().to_string()),
                }
                Task::none()
            }

            AuthMessage::OtpChanged(code) => {
                state.auth.otp = code
                    .chars()
                    .filter(char::is_ascii_digit)
                    .take(*OTP_LENGTH.end())
                    .collect();
                state.auth.error = None;
                Task::none()
            }

            AuthMessage::VerifyOtp => verify_otp(state),

            AuthMessage::LoggedIn(result) => {
                state.auth.verifying = false;
                match result {
                    Ok(session) => {
                        info!(user_id = %session.user_id, "session started");
                        let email = state.auth.email.trim().to_string();
                        state.remember_email(&email);
                        state.auth.otp.clear();
                        state.clear_customer_data();
                        state.toast_success(format!("Welcome, {}", session.display_name()));
                        let nav = state.nav();
                        nav.set_user(Some(session));
                        nav.navigate_route(Route::Dashboard, None);
                    }
                    Err(err) => state.auth.error = Some(err.user_message().to_string()),
                }
                Task::none()
            }

            AuthMessage::RegistrationChanged(field, value) => {
                state.registration.set(field, value);
                Task::none()
            }

            AuthMessage::SubmitRegistration => {
                if state.registration.submitting {
                    return Task::none();
                }
                if let Err(err) = state.registration.form.validate() {
                    state.registration.error = Some(err.to_string());
                    return Task::none();
                }
                let api = match state.api() {
                    Ok(api) => api,
                    Err(err) => {
                        state.show_error(err);
                        return Task::none();
                    }
                };
                state.registration.submitting = true;
                let form = state.registration.form.clone();
                Task::perform(service::auth::register(api, form), |result| {
                    Message::Auth(AuthMessage::Registered(result))
                })
            }

            AuthMessage::Registered(result) => {
                state.registration.submitting = false;
                match result {
                    Ok(()) => {
                        state.auth.email = state.registration.form.email.trim().to_string();
                        state.registration = Default::default();
                        state.toast_success("Registration received. Sign in with your email.");
                        state.nav().navigate_route(Route::Login, None);
                    }
                    Err(err) => state.registration.error = Some(err.user_message().to_string()),
                }
                Task::none()
            }
        }
    }
}

fn send_otp(state: &mut AppState) -> Task<Message> {
    if state.auth.is_busy() {
        return Task::none();
    }
    let email = state.auth.email.trim().to_string();
    if let Err(err) = validate_email(&email) {
        state.auth.error = Some(err.to_string());
        return Task::none();
    }
    let api = match state.api() {
        Ok(api) => api,
        Err(err) => {
            state.show_error(err);
            return Task::none();
        }
    };

    debug!("requesting OTP");
    state.auth.sending = true;
    state.auth.error = None;
    Task::perform(service::auth::request_otp(api, email), |result| {
        Message::Auth(AuthMessage::OtpSent(result))
    })
}

/// Check the code's shape locally, then exchange it for a session.
fn verify_otp(state: &mut AppState) -> Task<Message> {
    if state.auth.is_busy() {
        return Task::none();
    }
    if !state.auth.otp_is_plausible() {
        state.auth.error = Some(format!(
            "Enter the {} to {} digit code from your email",
            OTP_LENGTH.start(),
            OTP_LENGTH.end()
        ));
        return Task::none();
    }
    let email = state
        .nav()
        .payload_for::<OtpRequest>(Route::Otp)
        .map(|request| request.email.clone())
        .unwrap_or_else(|| state.auth.email.trim().to_string());
    let api = match state.api() {
        Ok(api) => api,
        Err(err) => {
            state.show_error(err);
            return Task::none();
        }
    };

    state.auth.verifying = true;
    state.auth.error = None;
    let otp = state.auth.otp.trim().to_string();
    Task::perform(service::auth::login(api, email, otp), |result| {
        Message::Auth(AuthMessage::LoggedIn(result))
    })
}
