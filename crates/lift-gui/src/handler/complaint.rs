//! New-complaint handler.

use iced::Task;
use lift_model::Route;
use lift_nav::Payload;
use tracing::debug;

use crate::handler::{MessageHandler, report};
use crate::message::{ComplaintMessage, Message};
use crate::service::customer;
use crate::state::AppState;

/// Handler for [`ComplaintMessage`].
pub struct ComplaintHandler;

impl MessageHandler<ComplaintMessage> for ComplaintHandler {
    fn handle(&self, state: &mut AppState, msg: ComplaintMessage) -> Task<Message> {
        match msg {
            ComplaintMessage::FieldChanged(field, value) => {
                state.complaint_form.set(field, value);
                Task::none()
            }

            ComplaintMessage::PriorityChanged(priority) => {
                state.complaint_form.draft.priority = priority;
                Task::none()
            }

            ComplaintMessage::Submit => {
                if state.complaint_form.submitting {
                    return Task::none();
                }
                let prepared = state
                    .customer_id()
                    .and_then(|id| state.api().map(|api| (id, api)));
                let (customer_id, api) = match prepared {
                    Ok(pair) => pair,
                    Err(err) => {
                        state.show_error(err);
                        return Task::none();
                    }
                };

                let form = &mut state.complaint_form;
                form.draft.customer_id = customer_id;
                if let Err(err) = form.draft.validate() {
                    form.error = Some(err.to_string());
                    return Task::none();
                }
                form.submitting = true;
                form.error = None;
                let draft = form.draft.clone();
                let epoch = state.session_epoch();
                Task::perform(customer::create_complaint(api, draft), move |result| {
                    Message::Complaint(ComplaintMessage::Created(epoch, result))
                })
            }

            ComplaintMessage::Created(epoch, result) => {
                if !state.is_current_session(epoch) {
                    debug!(epoch, "dropping complaint created in an earlier session");
                    return Task::none();
                }
                state.complaint_form.submitting = false;
                match result {
                    Ok(complaint) => {
                        let customer_id = state.customer_id().unwrap_or_default();
                        state.complaint_form.reset_for(&customer_id);
                        state.toast_success(format!("Ticket {} raised", complaint.reference()));
                        state.complaints.items.insert(0, complaint.clone());
                        state
                            .nav()
                            .navigate_route(Route::TicketDetails, Some(Payload::new(complaint)));
                    }
                    Err(err) => {
                        state.complaint_form.error = Some(err.user_message().to_string());
                        if err.is_unauthorized() {
                            report(state, "Raise complaint", &err);
                        }
                    }
                }
                Task::none()
            }
        }
    }
}
