//! Application state management.
//!
//! - **AppState**: root state, owns the navigation provider and backend client
//! - **ListState**: one fetched, searchable list per backend collection
//! - **Forms**: input screens with their in-flight and error flags

mod forms;
mod list;

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use lift_api::{ApiClient, ApiError};
use lift_model::{
    AmcContract, Complaint, ComplaintStatus, CustomerProfile, Invoice, MaintenanceVisit, Quotation,
    Session,
};
use lift_nav::{ContextEvent, Dispatcher, NavigationContext, NavigationProvider, Router, Screen};

use crate::component::ToastState;
use crate::error::GuiError;
use crate::settings::Settings;

pub use forms::{
    AuthForm, ComplaintField, ComplaintForm, NewUserField, NewUserForm, OTP_LENGTH,
    OtpRequest, RegistrationField, RegistrationForm,
};
pub use list::{ListState, Resource};

// =============================================================================
// NAVIGATION EVENTS
// =============================================================================

/// Collects [`ContextEvent`]s so `update()` can react to them after each
/// message.
pub struct NavEvents {
    queue: Arc<Mutex<Vec<ContextEvent>>>,
    _subscription: lift_nav::Subscription,
}

impl NavEvents {
    fn watch(context: &NavigationContext) -> Self {
        let queue: Arc<Mutex<Vec<ContextEvent>>> = Arc::default();
        let sink = Arc::clone(&queue);
        let subscription = context.subscribe(move |event| {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        });
        Self {
            queue,
            _subscription: subscription,
        }
    }

    /// Take every event published since the last call.
    pub fn drain(&self) -> Vec<ContextEvent> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Root application state.
pub struct AppState {
    pub settings: Settings,
    /// Where `settings` is persisted.
    pub settings_path: PathBuf,

    /// The backend client, or why it could not be built from the settings.
    api: Result<ApiClient, ApiError>,

    navigation: NavigationProvider,
    events: NavEvents,
    pub dispatcher: Dispatcher,

    // Forms
    pub auth: AuthForm,
    pub registration: RegistrationForm,
    pub complaint_form: ComplaintForm,
    pub new_user_form: NewUserForm,

    // Lists
    pub complaints: ListState<Complaint>,
    /// `None` shows every status.
    pub complaint_filter: Option<ComplaintStatus>,
    pub contracts: ListState<AmcContract>,
    pub visits: ListState<MaintenanceVisit>,
    pub invoices: ListState<Invoice>,
    pub quotations: ListState<Quotation>,
    pub profiles: ListState<CustomerProfile>,

    // Feedback
    pub toast: Option<ToastState>,
    pub error: Option<GuiError>,
    pub confirm_logout: bool,

    /// Bumped whenever customer data is dropped. Backend results are tagged
    /// with the epoch they were requested in.
    session_epoch: u64,
}

impl AppState {
    /// Build the state and mount navigation at the login route.
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        let api = ApiClient::new(&settings.api);
        if let Err(err) = &api {
            tracing::error!(error = %err, "backend client unavailable");
        }

        let navigation = NavigationProvider::mount(Router::new());
        let events = NavEvents::watch(navigation.context());

        let auth = AuthForm {
            email: settings.general.last_email.clone().unwrap_or_default(),
            ..AuthForm::default()
        };
        let error = api.as_ref().err().map(|e| GuiError::request("Startup", e));

        Self {
            settings,
            settings_path,
            api,
            navigation,
            events,
            dispatcher: Dispatcher::default(),
            auth,
            registration: RegistrationForm::default(),
            complaint_form: ComplaintForm::default(),
            new_user_form: NewUserForm::default(),
            complaints: ListState::default(),
            complaint_filter: None,
            contracts: ListState::default(),
            visits: ListState::default(),
            invoices: ListState::default(),
            quotations: ListState::default(),
            profiles: ListState::default(),
            toast: None,
            error,
            confirm_logout: false,
            session_epoch: 0,
        }
    }

    /// The navigation context mounted for this window.
    pub fn nav(&self) -> &NavigationContext {
        self.navigation.context()
    }

    pub fn session(&self) -> Option<Session> {
        self.nav().session()
    }

    /// Events published by the navigation context since the last call.
    pub fn drain_events(&self) -> Vec<ContextEvent> {
        self.events.drain()
    }

    /// The backend client, cloned for an async task.
    pub fn api(&self) -> Result<ApiClient, GuiError> {
        self.api
            .clone()
            .map_err(|e| GuiError::request("Connect", &e))
    }

    /// Customer id of the signed-in user.
    pub fn customer_id(&self) -> Result<String, GuiError> {
        self.session()
            .map(|s| s.customer_id().to_string())
            .ok_or(GuiError::NotSignedIn)
    }

    /// Screen for the current route and session.
    pub fn current_screen(&self) -> Screen {
        self.dispatcher
            .select(self.nav().route(), self.session().as_ref())
    }

    // =========================================================================
    // LISTS
    // =========================================================================

    /// Complaints after search, status filter and the closed-ticket setting.
    pub fn visible_complaints(&self) -> Vec<&Complaint> {
        let show_closed = self.settings.display.show_closed_tickets;
        self.complaints
            .filtered()
            .into_iter()
            .filter(|c| self.complaint_filter.as_ref().is_none_or(|f| &c.status == f))
            .filter(|c| show_closed || c.status.is_active())
            .collect()
    }

    /// Search text of the list behind `resource`.
    pub fn search_mut(&mut self, resource: Resource) -> &mut String {
        match resource {
            Resource::Complaints => &mut self.complaints.search,
            Resource::Contracts => &mut self.contracts.search,
            Resource::Maintenance => &mut self.visits.search,
            Resource::Invoices => &mut self.invoices.search,
            Resource::Quotations => &mut self.quotations.search,
            Resource::Profiles => &mut self.profiles.search,
        }
    }

    /// Reveal one more page of the list behind `resource`.
    pub fn show_more(&mut self, resource: Resource) {
        let page = self.settings.display.page_size();
        match resource {
            Resource::Complaints => self.complaints.show_more(page),
            Resource::Contracts => self.contracts.show_more(page),
            Resource::Maintenance => self.visits.show_more(page),
            Resource::Invoices => self.invoices.show_more(page),
            Resource::Quotations => self.quotations.show_more(page),
            Resource::Profiles => self.profiles.show_more(page),
        }
    }

    // =========================================================================
    // FEEDBACK
    // =========================================================================

    /// Show `err` as a toast when transient, in the error modal otherwise.
    pub fn show_error(&mut self, err: GuiError) {
        tracing::warn!(error = %err, "showing error");
        if err.is_transient() {
            self.toast = Some(ToastState::error(err.to_string()));
        } else {
            self.error = Some(err);
        }
    }

    pub fn toast_success(&mut self, message: impl Into<String>) {
        self.toast = Some(ToastState::success(message));
    }

    pub fn toast_info(&mut self, message: impl Into<String>) {
        self.toast = Some(ToastState::info(message));
    }

    // =========================================================================
    // SESSION DATA
    // =========================================================================

    /// Epoch to tag a backend request with.
    pub fn session_epoch(&self) -> u64 {
        self.session_epoch
    }

    /// Whether a result tagged with `epoch` still belongs to this session.
    pub fn is_current_session(&self, epoch: u64) -> bool {
        epoch == self.session_epoch
    }

    /// Drop everything fetched for the previous customer.
    ///
    /// Results of requests still in flight are ignored when they arrive.
    pub fn clear_customer_data(&mut self) {
        self.session_epoch = self.session_epoch.wrapping_add(1);
        self.complaints.clear();
        self.complaint_filter = None;
        self.contracts.clear();
        self.visits.clear();
        self.invoices.clear();
        self.quotations.clear();
        self.profiles.clear();
        self.complaint_form = ComplaintForm::default();
        self.new_user_form = NewUserForm::default();
    }

    /// Remember the email of a successful sign-in for next time.
    pub fn remember_email(&mut self, email: &str) {
        if self.settings.general.last_email.as_deref() == Some(email) {
            return;
        }
        self.settings.general.last_email = Some(email.to_string());
        if let Err(e) = self.settings.save_to(&self.settings_path) {
            self.show_error(GuiError::SettingsSave {
                reason: format!("{e:#}"),
            });
        }
    }
}
