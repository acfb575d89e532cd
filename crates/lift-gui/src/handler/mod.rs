//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type. The main
//! `App::update()` dispatches to them:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Auth(msg) => AuthHandler.handle(&mut self.state, msg),
//!         Message::Data(msg) => DataHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```
//!
//! Navigation events are handled the same way: after every message the app
//! drains the [`ContextEvent`](lift_nav::ContextEvent)s published by the
//! navigation context and feeds them to [`NavigationHandler`].

mod account;
mod auth;
mod complaint;
mod data;
mod navigation;

use iced::Task;
use lift_api::ApiError;

use crate::error::GuiError;
use crate::message::Message;
use crate::state::AppState;

pub use account::AccountHandler;
pub use auth::AuthHandler;
pub use complaint::ComplaintHandler;
pub use data::DataHandler;
pub use navigation::NavigationHandler;

/// Trait for handling messages in the Iced architecture.
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

/// Show a failed backend call. A rejected session signs the user out.
pub(crate) fn report(state: &mut AppState, operation: &str, err: &ApiError) {
    let gui = GuiError::request(operation, err);
    if gui == GuiError::SessionExpired && state.nav().is_authenticated() {
        tracing::warn!(operation, "session rejected by backend, signing out");
        state.nav().logout();
        state.clear_customer_data();
    }
    state.show_error(gui);
}
