//! List loading and filtering handler.

use std::future::Future;

use iced::Task;
use lift_api::ApiError;
use tracing::debug;

use crate::error::GuiError;
use crate::handler::{MessageHandler, report};
use crate::message::{DataMessage, Message};
use crate::service::customer;
use crate::state::{AppState, ListState, Resource};

/// Handler for [`DataMessage`].
pub struct DataHandler;

impl MessageHandler<DataMessage> for DataHandler {
    fn handle(&self, state: &mut AppState, msg: DataMessage) -> Task<Message> {
        match msg {
            DataMessage::Load(resource) => load(state, resource),

            DataMessage::ComplaintsLoaded(epoch, result) => {
                if is_stale(state, Resource::Complaints, epoch) {
                    return Task::none();
                }
                let outcome = state.complaints.finish(result);
                loaded(state, Resource::Complaints, outcome)
            }
            DataMessage::ContractsLoaded(epoch, result) => {
                if is_stale(state, Resource::Contracts, epoch) {
                    return Task::none();
                }
                let outcome = state.contracts.finish(result);
                loaded(state, Resource::Contracts, outcome)
            }
            DataMessage::MaintenanceLoaded(epoch, result) => {
                if is_stale(state, Resource::Maintenance, epoch) {
                    return Task::none();
                }
                let outcome = state.visits.finish(result);
                loaded(state, Resource::Maintenance, outcome)
            }
            DataMessage::InvoicesLoaded(epoch, result) => {
                if is_stale(state, Resource::Invoices, epoch) {
                    return Task::none();
                }
                let outcome = state.invoices.finish(result);
                loaded(state, Resource::Invoices, outcome)
            }
            DataMessage::QuotationsLoaded(epoch, result) => {
                if is_stale(state, Resource::Quotations, epoch) {
                    return Task::none();
                }
                let outcome = state.quotations.finish(result);
                loaded(state, Resource::Quotations, outcome)
            }
            DataMessage::ProfilesLoaded(epoch, result) => {
                if is_stale(state, Resource::Profiles, epoch) {
                    return Task::none();
                }
                let outcome = state.profiles.finish(result);
                loaded(state, Resource::Profiles, outcome)
            }

            DataMessage::SearchChanged(resource, query) => {
                *state.search_mut(resource) = query;
                Task::none()
            }

            DataMessage::SearchCleared(resource) => {
                state.search_mut(resource).clear();
                Task::none()
            }

            DataMessage::StatusFilterChanged(filter) => {
                state.complaint_filter = filter;
                Task::none()
            }

            DataMessage::ShowClosedToggled(show) => {
                state.settings.display.show_closed_tickets = show;
                if let Err(e) = state.settings.save_to(&state.settings_path) {
                    state.show_error(GuiError::SettingsSave {
                        reason: format!("{e:#}"),
                    });
                }
                Task::none()
            }

            DataMessage::ShowMore(resource) => {
                state.show_more(resource);
                Task::none()
            }
        }
    }
}

/// Start fetching `resource` for the signed-in customer.
fn load(state: &mut AppState, resource: Resource) -> Task<Message> {
    let customer_id = match state.customer_id() {
        Ok(id) => id,
        Err(_) => {
            debug!(resource = resource.label(), "not signed in, skipping load");
            return Task::none();
        }
    };
    let api = match state.api() {
        Ok(api) => api,
        Err(err) => {
            state.show_error(err);
            return Task::none();
        }
    };

    let epoch = state.session_epoch();
    debug!(resource = resource.label(), %customer_id, epoch, "loading");
    match resource {
        Resource::Complaints => fetch(
            &mut state.complaints,
            customer::complaints(api, customer_id),
            epoch,
            DataMessage::ComplaintsLoaded,
        ),
        Resource::Contracts => fetch(
            &mut state.contracts,
            customer::contracts(api, customer_id),
            epoch,
            DataMessage::ContractsLoaded,
        ),
        Resource::Maintenance => fetch(
            &mut state.visits,
            customer::maintenance(api, customer_id),
            epoch,
            DataMessage::MaintenanceLoaded,
        ),
        Resource::Invoices => fetch(
            &mut state.invoices,
            customer::invoices(api, customer_id),
            epoch,
            DataMessage::InvoicesLoaded,
        ),
        Resource::Quotations => fetch(
            &mut state.quotations,
            customer::quotations(api, customer_id),
            epoch,
            DataMessage::QuotationsLoaded,
        ),
        Resource::Profiles => fetch(
            &mut state.profiles,
            customer::profiles(api, customer_id),
            epoch,
            DataMessage::ProfilesLoaded,
        ),
    }
}

fn fetch<T, F>(
    list: &mut ListState<T>,
    request: F,
    epoch: u64,
    done: fn(u64, Result<Vec<T>, ApiError>) -> DataMessage,
) -> Task<Message>
where
    T: Send + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
{
    if !list.begin_load() {
        return Task::none();
    }
    Task::perform(request, move |result| Message::Data(done(epoch, result)))
}

/// A result requested before the customer data was last cleared.
fn is_stale(state: &AppState, resource: Resource, epoch: u64) -> bool {
    let stale = !state.is_current_session(epoch);
    if stale {
        debug!(resource = resource.label(), epoch, "dropping result from an earlier session");
    }
    stale
}

fn loaded(state: &mut AppState, resource: Resource, outcome: Result<(), ApiError>) -> Task<Message> {
    if let Err(err) = outcome {
        report(state, &format!("Load {}", resource.label()), &err);
    }
    Task::none()
}
