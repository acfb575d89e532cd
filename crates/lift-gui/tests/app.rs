//! Update-loop behavior driven through `App::update`.
//!
//! Only the synchronous half of each flow is exercised: backend results are
//! fed back as messages instead of being fetched.

use lift_api::{ApiError, ApiSettings};
use lift_gui::App;
use std::time::Duration;

use iced::time::Instant;
use lift_gui::component::{TOAST_DURATION, ToastKind, ToastMessage, ToastState};
use lift_gui::error::GuiError;
use lift_gui::message::{AccountMessage, AuthMessage, ComplaintMessage, DataMessage, Message};
use lift_gui::settings::Settings;
use lift_gui::state::{NewUserField, OtpRequest, Resource};
use lift_model::{Complaint, CustomerProfile, Role, Route, Session};
use lift_nav::{Payload, Screen};
use tempfile::TempDir;

fn app() -> (App, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        api: ApiSettings::with_base_url("http://127.0.0.1:9/api/"),
        ..Settings::default()
    };
    let app = App::with_settings(settings, dir.path().join("settings.toml"));
    (app, dir)
}

fn signed_in(role: Role) -> (App, TempDir) {
    let (mut app, dir) = app();
    let _ = app.update(Message::Auth(AuthMessage::EmailChanged("owner@example.com".into())));
    let session = Session::new("42", "Tower A", role).with_email("owner@example.com");
    let _ = app.update(Message::Auth(AuthMessage::LoggedIn(Ok(session))));
    (app, dir)
}

fn complaint(id: &str, subject: &str, status: &str) -> Complaint {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "ticket_number": format!("T-{id}"),
        "subject": subject,
        "site_name": "Tower A",
        "status": status,
    }))
    .unwrap()
}

#[test]
fn signed_out_user_is_sent_to_login() {
    let (mut app, _dir) = app();

    let _ = app.update(Message::go(Route::Complaints));

    assert_eq!(app.state.nav().route(), Route::Login);
    let toast = app.state.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Info);
}

#[test]
fn about_page_is_open_to_everyone() {
    let (mut app, _dir) = app();

    let _ = app.update(Message::go(Route::AboutUs));

    assert_eq!(app.state.nav().route(), Route::AboutUs);
    assert_eq!(app.state.current_screen(), Screen::AboutUs);
    assert_eq!(app.title(), "About Us - LiftCare");
}

#[test]
fn unknown_path_shows_navigation_error() {
    let (mut app, _dir) = app();

    let _ = app.update(Message::Navigate {
        path: "/nowhere".into(),
        data: None,
    });

    assert!(matches!(app.state.error, Some(GuiError::Navigation { .. })));
    assert_eq!(app.state.nav().route(), Route::Login);
}

#[test]
fn otp_input_keeps_only_digits() {
    let (mut app, _dir) = app();

    let _ = app.update(Message::Auth(AuthMessage::OtpChanged("12a3 4-5678".into())));

    assert_eq!(app.state.auth.otp, "123456");
}

#[test]
fn short_otp_is_refused_locally() {
    let (mut app, _dir) = app();
    let _ = app.update(Message::Auth(AuthMessage::OtpChanged("12".into())));

    let _ = app.update(Message::Auth(AuthMessage::VerifyOtp));

    assert!(!app.state.auth.verifying);
    assert_eq!(
        app.state.auth.error.as_deref(),
        Some("Enter the 4 to 6 digit code from your email")
    );
}

#[test]
fn invalid_email_never_reaches_the_backend() {
    let (mut app, _dir) = app();
    let _ = app.update(Message::Auth(AuthMessage::EmailChanged("not-an-email".into())));

    let _ = app.update(Message::Auth(AuthMessage::SendOtp));

    assert!(!app.state.auth.sending);
    assert!(app.state.auth.error.is_some());
}

#[test]
fn sent_code_carries_the_email_to_the_otp_screen() {
    let (mut app, _dir) = app();
    let _ = app.update(Message::Auth(AuthMessage::EmailChanged(" owner@example.com ".into())));

    let _ = app.update(Message::Auth(AuthMessage::OtpSent(Ok(()))));

    assert_eq!(app.state.nav().route(), Route::Otp);
    let request = app.state.nav().current_payload::<OtpRequest>().unwrap();
    assert_eq!(request.email, "owner@example.com");
}

#[test]
fn login_opens_dashboard_and_starts_loading() {
    let (app, dir) = signed_in(Role::Customer);

    assert_eq!(app.state.nav().route(), Route::Dashboard);
    assert_eq!(app.state.current_screen(), Screen::Dashboard);
    assert_eq!(app.state.session().unwrap().user_id, "42");
    assert!(app.state.complaints.loading);
    assert!(app.state.contracts.loading);
    assert!(app.state.invoices.loading);
    assert!(!app.state.quotations.loading);

    let saved = Settings::load_from(&dir.path().join("settings.toml"));
    assert_eq!(saved.general.last_email.as_deref(), Some("owner@example.com"));
}

#[test]
fn loaded_complaints_are_filtered_for_display() {
    let (mut app, _dir) = signed_in(Role::Customer);

    let epoch = app.state.session_epoch();
    let _ = app.update(Message::Data(DataMessage::ComplaintsLoaded(epoch, Ok(vec![
        complaint("1", "Door stuck", "open"),
        complaint("2", "Noisy cabin", "closed"),
        complaint("3", "Door sensor", "in progress"),
    ]))));
    assert!(!app.state.complaints.loading);
    assert_eq!(app.state.visible_complaints().len(), 3);

    let _ = app.update(Message::Data(DataMessage::SearchChanged(
        Resource::Complaints,
        "door".into(),
    )));
    assert_eq!(app.state.visible_complaints().len(), 2);

    let _ = app.update(Message::Data(DataMessage::ShowClosedToggled(false)));
    let _ = app.update(Message::Data(DataMessage::SearchCleared(Resource::Complaints)));
    let ids: Vec<_> = app
        .state
        .visible_complaints()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn rejected_session_signs_out() {
    let (mut app, _dir) = signed_in(Role::Customer);

    let epoch = app.state.session_epoch();
    let _ = app.update(Message::Data(DataMessage::InvoicesLoaded(
        epoch,
        Err(ApiError::Status {
            status: 401,
            message: "Unauthorized".into(),
        }),
    )));

    assert!(app.state.session().is_none());
    assert_eq!(app.state.nav().route(), Route::Login);
    assert_eq!(app.state.error, Some(GuiError::SessionExpired));
}

#[test]
fn logout_clears_session_and_data() {
    let (mut app, _dir) = signed_in(Role::Customer);
    let epoch = app.state.session_epoch();
    let _ = app.update(Message::Data(DataMessage::ComplaintsLoaded(
        epoch,
        Ok(vec![complaint("1", "Door stuck", "open")]),
    )));

    let _ = app.update(Message::RequestLogout);
    assert!(app.state.confirm_logout);
    let _ = app.update(Message::Logout);

    assert!(!app.state.confirm_logout);
    assert!(app.state.session().is_none());
    assert_eq!(app.state.nav().route(), Route::Login);
    assert!(app.state.complaints.items.is_empty());
}

#[test]
fn escape_closes_error_before_logout_prompt() {
    let (mut app, _dir) = signed_in(Role::Customer);
    let _ = app.update(Message::RequestLogout);
    app.state.error = Some(GuiError::NotSignedIn);

    let _ = app.update(Message::EscapePressed);
    assert!(app.state.error.is_none());
    assert!(app.state.confirm_logout);

    let _ = app.update(Message::EscapePressed);
    assert!(!app.state.confirm_logout);
}

#[test]
fn switching_profile_replaces_the_session() {
    let (mut app, _dir) = signed_in(Role::Customer);
    let _ = app.update(Message::go(Route::ProfileSwitch));
    assert!(app.state.profiles.loading);

    let profile = CustomerProfile {
        id: "77".into(),
        name: "Wing B".into(),
        email: String::new(),
        role: Role::SubCustomer,
        site_name: Some("Wing B".into()),
        customer_id: Some("42".into()),
    };
    let _ = app.update(Message::Account(AccountMessage::SwitchProfile(profile)));

    let session = app.state.session().unwrap();
    assert_eq!(session.user_id, "77");
    assert_eq!(session.customer_id(), "42");
    assert_eq!(session.email, "owner@example.com");
    assert_eq!(app.state.nav().route(), Route::Dashboard);
    assert!(app.state.profiles.items.is_empty());
}

#[test]
fn sub_customer_cannot_create_users() {
    let (mut app, _dir) = signed_in(Role::SubCustomer);

    let _ = app.update(Message::go(Route::CreateUser));
    assert_eq!(app.state.nav().route(), Route::CreateUser);
    assert_eq!(app.state.current_screen(), Screen::Dashboard);

    for (field, value) in [
        (NewUserField::Name, "Guard"),
        (NewUserField::Email, "guard@example.com"),
    ] {
        let _ = app.update(Message::Account(AccountMessage::NewUserChanged(
            field,
            value.into(),
        )));
    }
    let _ = app.update(Message::Account(AccountMessage::SubmitNewUser));

    assert!(!app.state.new_user_form.submitting);
    assert!(app.state.error.is_none());
    let toast = app.state.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
}

#[test]
fn created_user_appears_in_profiles() {
    let (mut app, _dir) = signed_in(Role::Customer);
    let profile = CustomerProfile {
        id: "90".into(),
        name: "Guard".into(),
        email: "guard@example.com".into(),
        role: Role::SubCustomer,
        site_name: None,
        customer_id: Some("42".into()),
    };

    let epoch = app.state.session_epoch();
    let _ = app.update(Message::Account(AccountMessage::UserCreated(epoch, Ok(profile))));

    assert_eq!(app.state.nav().route(), Route::ProfileSwitch);
    assert!(app.state.profiles.items.iter().any(|p| p.id == "90"));
}

#[test]
fn ticket_details_read_the_navigation_payload() {
    let (mut app, _dir) = signed_in(Role::Customer);
    let ticket = complaint("5", "Button light out", "open");

    let _ = app.update(Message::go_with(Route::TicketDetails, ticket.clone()));

    assert_eq!(app.state.nav().route(), Route::TicketDetails);
    assert_eq!(
        app.state.nav().current_payload::<Complaint>().as_deref(),
        Some(&ticket)
    );

    let _ = app.update(Message::Navigate {
        path: Route::TicketDetails.path(),
        data: Some(Payload::new(complaint("6", "Cabin fan", "open"))),
    });
    assert_eq!(app.state.nav().current_payload::<Complaint>().unwrap().id, "6");
}

#[test]
fn results_from_an_earlier_session_are_dropped() {
    let (mut app, _dir) = signed_in(Role::Customer);
    let old_epoch = app.state.session_epoch();

    let _ = app.update(Message::Logout);
    let next = Session::new("99", "Tower B", Role::Customer);
    let _ = app.update(Message::Auth(AuthMessage::LoggedIn(Ok(next))));
    assert!(app.state.complaints.loading);

    let _ = app.update(Message::Data(DataMessage::ComplaintsLoaded(
        old_epoch,
        Ok(vec![complaint("1", "Tower A private ticket", "open")]),
    )));
    assert!(app.state.complaints.items.is_empty());
    assert!(app.state.complaints.loading);

    let _ = app.update(Message::Data(DataMessage::InvoicesLoaded(
        old_epoch,
        Err(ApiError::Status {
            status: 401,
            message: "Unauthorized".into(),
        }),
    )));
    assert_eq!(app.state.session().unwrap().user_id, "99");
    assert!(app.state.error.is_none());

    let epoch = app.state.session_epoch();
    let _ = app.update(Message::Data(DataMessage::ComplaintsLoaded(
        epoch,
        Ok(vec![complaint("7", "Tower B lobby lift", "open")]),
    )));
    assert_eq!(app.state.complaints.items.len(), 1);
    assert_eq!(app.state.complaints.items[0].id, "7");
}

#[test]
fn complaint_created_before_profile_switch_is_ignored() {
    let (mut app, _dir) = signed_in(Role::Customer);
    let old_epoch = app.state.session_epoch();
    let profile = CustomerProfile {
        id: "77".into(),
        name: "Wing B".into(),
        email: String::new(),
        role: Role::SubCustomer,
        site_name: None,
        customer_id: Some("42".into()),
    };
    let _ = app.update(Message::Account(AccountMessage::SwitchProfile(profile)));

    let _ = app.update(Message::Complaint(ComplaintMessage::Created(
        old_epoch,
        Ok(complaint("3", "Door stuck", "open")),
    )));

    assert_eq!(app.state.nav().route(), Route::Dashboard);
    assert!(app.state.complaints.items.is_empty());
}

#[test]
fn redirected_sub_customer_gets_dashboard_data() {
    let (mut app, _dir) = signed_in(Role::SubCustomer);
    let epoch = app.state.session_epoch();
    let _ = app.update(Message::Data(DataMessage::ComplaintsLoaded(epoch, Ok(Vec::new()))));
    assert!(!app.state.complaints.loading);

    let _ = app.update(Message::go(Route::CreateUser));

    assert_eq!(app.state.current_screen(), Screen::Dashboard);
    assert!(app.state.complaints.loading);
}

#[test]
fn replaced_toast_keeps_its_full_duration() {
    let (mut app, _dir) = app();
    let first = ToastState::info("First");
    let tick = first.shown_at + TOAST_DURATION;
    let second = ToastState {
        shown_at: tick - Duration::from_millis(100),
        ..ToastState::info("Second")
    };
    app.state.toast = Some(second);

    let _ = app.update(Message::Toast(ToastMessage::Tick(tick)));
    assert_eq!(app.state.toast.as_ref().unwrap().message, "Second");

    let _ = app.update(Message::Toast(ToastMessage::Tick(
        tick + TOAST_DURATION,
    )));
    assert!(app.state.toast.is_none());
}

#[test]
fn toast_survives_ticks_before_it_expires() {
    let (mut app, _dir) = app();
    app.state.toast_success("Saved");
    let shown_at = app.state.toast.as_ref().unwrap().shown_at;

    let _ = app.update(Message::Toast(ToastMessage::Tick(shown_at)));
    assert!(app.state.toast.is_some());

    let _ = app.update(Message::Toast(ToastMessage::Tick(Instant::now() + TOAST_DURATION)));
    assert!(app.state.toast.is_none());
}
