//! Main application module for LiftCare.
//!
//! Implements the Iced 0.14 application with the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! Navigation lives in `lift-nav`: handlers call the navigation context, and
//! every event it publishes while a message is processed is drained at the
//! end of [`App::update`] and handled by
//! [`NavigationHandler`](crate::handler::NavigationHandler).

mod subscription;

use std::path::PathBuf;

use iced::{Element, Subscription, Task, Theme};
use lift_model::Route;
use tracing::{info, warn};

use crate::component::ToastMessage;
use crate::handler::{
    AccountHandler, AuthHandler, ComplaintHandler, DataHandler, MessageHandler, NavigationHandler,
};
use crate::message::Message;
use crate::service;
use crate::settings::Settings;
use crate::state::AppState;
use crate::theme::liftcare_theme;
use crate::view::view_app;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application with settings from the user's config directory.
    pub fn new() -> (Self, Task<Message>) {
        let path = Settings::config_path();
        (Self::with_settings(Settings::load_from(&path), path), Task::none())
    }

    /// Create the application with explicit settings.
    pub fn with_settings(settings: Settings, settings_path: PathBuf) -> Self {
        info!(api = %settings.api.base_url, "starting LiftCare");
        Self {
            state: AppState::new(settings, settings_path),
        }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut tasks = vec![self.dispatch(message)];

        loop {
            let events = self.state.drain_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                tasks.push(NavigationHandler.handle(&mut self.state, event));
            }
        }

        Task::batch(tasks)
    }

    fn dispatch(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate { path, data } => {
                self.navigate(&path, data);
                Task::none()
            }

            Message::RequestLogout => {
                self.state.confirm_logout = true;
                Task::none()
            }

            Message::CancelLogout => {
                self.state.confirm_logout = false;
                Task::none()
            }

            Message::Logout => self.logout(),

            Message::LogoutComplete(result) => {
                if let Err(err) = result {
                    warn!(error = %err, "server-side logout failed");
                }
                Task::none()
            }

            // =================================================================
            // Screen messages
            // =================================================================
            Message::Auth(msg) => AuthHandler.handle(&mut self.state, msg),
            Message::Data(msg) => DataHandler.handle(&mut self.state, msg),
            Message::Complaint(msg) => ComplaintHandler.handle(&mut self.state, msg),
            Message::Account(msg) => AccountHandler.handle(&mut self.state, msg),

            // =================================================================
            // Feedback
            // =================================================================
            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }

            Message::Toast(ToastMessage::Tick(now)) => {
                if self.state.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
                    self.state.toast = None;
                }
                Task::none()
            }

            Message::DismissError => {
                self.state.error = None;
                Task::none()
            }

            Message::EscapePressed => {
                if self.state.error.is_some() {
                    self.state.error = None;
                } else {
                    self.state.confirm_logout = false;
                }
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Go to `path`. Signed-out users are sent to the login screen instead of
    /// a screen that needs an account.
    fn navigate(&mut self, path: &str, data: Option<lift_nav::Payload>) {
        let nav = self.state.nav();
        if let Ok(route) = path.parse::<Route>()
            && needs_account(route)
            && !nav.is_authenticated()
        {
            nav.navigate_route(Route::Login, None);
            self.state.toast_info("Sign in to continue");
            return;
        }
        if let Err(err) = nav.navigate_to(path, data) {
            self.state.show_error(err.into());
        }
    }

    fn logout(&mut self) -> Task<Message> {
        self.state.confirm_logout = false;
        let session = self.state.session();
        self.state.nav().logout();
        self.state.clear_customer_data();
        self.state.auth.otp.clear();
        self.state.toast_info("Signed out");

        match (session, self.state.api()) {
            (Some(session), Ok(api)) => {
                Task::perform(service::auth::logout(api, session), Message::LogoutComplete)
            }
            _ => Task::none(),
        }
    }

    /// Render the window.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        format!("{} - LiftCare", self.state.nav().route().title())
    }

    pub fn theme(&self) -> Theme {
        liftcare_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

/// Whether `route` is only meaningful with a signed-in account.
pub fn needs_account(route: Route) -> bool {
    !route.is_public() && route != Route::AboutUs
}
