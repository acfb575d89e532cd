//! Reactions to navigation context events.
//!
//! Screens fetch their data when they are entered, and again when the
//! session changes underneath them.

use iced::Task;
use lift_model::Route;
use lift_nav::{ContextEvent, Screen};
use tracing::{debug, trace};

use crate::handler::{DataHandler, MessageHandler};
use crate::message::{DataMessage, Message};
use crate::state::{AppState, Resource};

/// Handler for [`ContextEvent`]s drained after each update.
pub struct NavigationHandler;

impl MessageHandler<ContextEvent> for NavigationHandler {
    fn handle(&self, state: &mut AppState, event: ContextEvent) -> Task<Message> {
        match event {
            ContextEvent::RouteChanged(route) => {
                debug!(%route, "route entered");
                state.confirm_logout = false;
                enter(state, route)
            }
            ContextEvent::SessionChanged => {
                let route = state.nav().route();
                debug!(%route, signed_in = state.nav().is_authenticated(), "session changed");
                enter(state, route)
            }
            ContextEvent::PayloadChanged(route) => {
                trace!(?route, "navigation data replaced");
                Task::none()
            }
        }
    }
}

/// Lists a screen shows, fetched when it is entered.
pub fn resources_for(screen: Screen) -> &'static [Resource] {
    match screen {
        Screen::Dashboard => &[Resource::Complaints, Resource::Contracts, Resource::Invoices],
        Screen::Complaints => &[Resource::Complaints],
        Screen::RoutineMaintenance => &[Resource::Maintenance],
        Screen::AmcContracts => &[Resource::Contracts],
        Screen::Invoices => &[Resource::Invoices],
        Screen::Quotations => &[Resource::Quotations],
        Screen::ProfileSwitch => &[Resource::Profiles],
        _ => &[],
    }
}

/// Fetch the lists of the screen the dispatcher shows for `route`, which is
/// not always the screen registered for it.
fn enter(state: &mut AppState, route: Route) -> Task<Message> {
    if !state.nav().is_authenticated() {
        return Task::none();
    }
    let screen = state.current_screen();
    trace!(%route, ?screen, "fetching for screen");
    Task::batch(
        resources_for(screen)
            .iter()
            .map(|&resource| DataHandler.handle(state, DataMessage::Load(resource)))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_and_detail_screens_fetch_nothing() {
        for screen in [
            Screen::Login,
            Screen::Otp,
            Screen::Register,
            Screen::TicketDetails,
            Screen::AboutUs,
            Screen::CreateUser,
        ] {
            assert!(resources_for(screen).is_empty(), "{screen:?}");
        }
        assert_eq!(resources_for(Screen::Invoices), &[Resource::Invoices]);
    }
}
