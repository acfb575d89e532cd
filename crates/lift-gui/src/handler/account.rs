//! Profile switching and sub-customer creation handler.

use iced::Task;
use lift_model::Route;
use tracing::{debug, info};

use crate::error::GuiError;
use crate::handler::{MessageHandler, report};
use crate::message::{AccountMessage, Message};
use crate::service::customer;
use crate::state::{AppState, NewUserForm};

/// Handler for [`AccountMessage`].
pub struct AccountHandler;

impl MessageHandler<AccountMessage> for AccountHandler {
    fn handle(&self, state: &mut AppState, msg: AccountMessage) -> Task<Message> {
        match msg {
            AccountMessage::SwitchProfile(profile) => {
                let Some(current) = state.session() else {
                    state.show_error(GuiError::NotSignedIn);
                    return Task::none();
                };
                if profile.id == current.user_id {
                    return Task::none();
                }

                let next = profile.to_session(&current);
                info!(from = %current.user_id, to = %next.user_id, "switching profile");
                state.clear_customer_data();
                state.toast_info(format!("Now acting as {}", next.display_name()));
                let nav = state.nav();
                nav.set_user(Some(next));
                nav.navigate_route(Route::Dashboard, None);
                Task::none()
            }

            AccountMessage::NewUserChanged(field, value) => {
                state.new_user_form.set(field, value);
                Task::none()
            }

            AccountMessage::SubmitNewUser => {
                if state.new_user_form.submitting {
                    return Task::none();
                }
                if state.session().is_some_and(|s| s.is_sub_customer()) {
                    state.show_error(GuiError::Validation {
                        message: "Sub-customer accounts cannot create users".to_string(),
                    });
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

                let form = &mut state.new_user_form;
                if let Err(err) = form.form.validate() {
                    form.error = Some(err.to_string());
                    return Task::none();
                }
                form.submitting = true;
                form.error = None;
                let new_user = form.form.clone();
                let epoch = state.session_epoch();
                Task::perform(
                    customer::create_user(api, customer_id, new_user),
                    move |result| Message::Account(AccountMessage::UserCreated(epoch, result)),
                )
            }

            AccountMessage::UserCreated(epoch, result) => {
                if !state.is_current_session(epoch) {
                    debug!(epoch, "dropping user created in an earlier session");
                    return Task::none();
                }
                state.new_user_form.submitting = false;
                match result {
                    Ok(profile) => {
                        state.new_user_form = NewUserForm::default();
                        state.toast_success(format!("{} can now sign in", profile.name));
                        state.profiles.items.push(profile);
                        state.nav().navigate_route(Route::ProfileSwitch, None);
                    }
                    Err(err) => {
                        state.new_user_form.error = Some(err.user_message().to_string());
                        if err.is_unauthorized() {
                            report(state, "Create user", &err);
                        }
                    }
                }
                Task::none()
            }
        }
    }
}
