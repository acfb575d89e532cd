//! Login, OTP and registration screens.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use lift_model::Route;

use crate::component::{form_field, form_field_submit};
use crate::message::{AuthMessage, Message};
use crate::state::{AppState, OtpRequest, RegistrationField};
use crate::theme::{
    AUTH_CARD_WIDTH, ERROR, GRAY_500, GRAY_900, PRIMARY_500, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, button_ghost, button_primary, card,
};

/// Email entry, first step of sign-in.
pub fn view_login(state: &AppState) -> Element<'_, Message> {
    let form = &state.auth;
    let send = (!form.is_busy()).then_some(Message::Auth(AuthMessage::SendOtp));

    let body = column![
        form_field_submit(
            "Email",
            &form.email,
            "you@company.com",
            |v| Message::Auth(AuthMessage::EmailChanged(v)),
            send.clone(),
        ),
        error_line(form.error.as_deref()),
        primary_action(if form.sending { "Sending..." } else { "Send code" }, send),
        Space::new().height(SPACING_SM),
        row![
            text("New to LiftCare?").size(13).color(GRAY_500),
            link("Register", Message::go(Route::Register)),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        link("About us", Message::go(Route::AboutUs)),
    ]
    .spacing(SPACING_MD);

    auth_card("Sign in", "We will email you a one-time code.", body.into())
}

/// One-time password entry, second step of sign-in.
pub fn view_otp(state: &AppState) -> Element<'_, Message> {
    let form = &state.auth;
    let email = state
        .nav()
        .payload_for::<OtpRequest>(Route::Otp)
        .map(|request| request.email.clone())
        .unwrap_or_else(|| form.email.trim().to_string());
    let verify = (!form.is_busy()).then_some(Message::Auth(AuthMessage::VerifyOtp));

    let body = column![
        form_field_submit(
            "Code",
            &form.otp,
            "123456",
            |v| Message::Auth(AuthMessage::OtpChanged(v)),
            verify.clone(),
        ),
        error_line(form.error.as_deref()),
        primary_action(if form.verifying { "Verifying..." } else { "Verify" }, verify),
        row![
            button(text("Resend code").size(13))
                .on_press_maybe(
                    (!form.is_busy()).then_some(Message::Auth(AuthMessage::ResendOtp))
                )
                .style(button_ghost),
            link("Use a different email", Message::go(Route::Login)),
        ]
        .spacing(SPACING_SM),
    ]
    .spacing(SPACING_MD);

    auth_card(
        "Enter your code",
        format!("We sent a code to {email}."),
        body.into(),
    )
}

/// Self-registration form.
pub fn view_register(state: &AppState) -> Element<'_, Message> {
    let reg = &state.registration;
    let submit = (!reg.submitting).then_some(Message::Auth(AuthMessage::SubmitRegistration));

    let body = column![
        registration_field("Name", &reg.form.name, "Full name", RegistrationField::Name),
        registration_field("Email", &reg.form.email, "you@company.com", RegistrationField::Email),
        registration_field("Phone", &reg.form.phone, "10-digit mobile", RegistrationField::Phone),
        registration_field(
            "Company",
            &reg.form.company,
            "Building or company",
            RegistrationField::Company
        ),
        error_line(reg.error.as_deref()),
        primary_action(if reg.submitting { "Submitting..." } else { "Register" }, submit),
        link("Back to sign in", Message::go(Route::Login)),
    ]
    .spacing(SPACING_MD);

    auth_card(
        "Register",
        "Tell us about your building. We will set up your account.",
        body.into(),
    )
}

// =============================================================================
// HELPERS
// =============================================================================

fn auth_card<'a>(
    title: &'a str,
    subtitle: impl Into<String>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let content = column![
        row![
            lucide::house().size(28).color(PRIMARY_500),
            text("LiftCare").size(24).color(GRAY_900),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        Space::new().height(SPACING_LG),
        text(title).size(20).color(GRAY_900),
        text(subtitle.into()).size(13).color(GRAY_500),
        Space::new().height(SPACING_MD),
        body,
    ];

    container(
        container(content)
            .width(Length::Fixed(AUTH_CARD_WIDTH))
            .padding(SPACING_XL)
            .style(card),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn registration_field<'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    which: RegistrationField,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        placeholder,
        move |v| Message::Auth(AuthMessage::RegistrationChanged(which, v)),
        None,
    )
}

fn primary_action<'a>(label: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    button(container(text(label).size(14)).center_x(Length::Fill))
        .on_press_maybe(on_press)
        .width(Length::Fill)
        .padding([10.0, 20.0])
        .style(button_primary)
        .into()
}

fn link<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(text(label).size(13).color(PRIMARY_500))
        .on_press(message)
        .padding(0.0)
        .style(button_ghost)
        .into()
}

fn error_line(error: Option<&str>) -> Element<'_, Message> {
    match error {
        Some(message) => text(message).size(12).color(ERROR).into(),
        None => Space::new().height(0.0).into(),
    }
}
