//! View module for LiftCare.
//!
//! Views are pure functions of [`AppState`]. The screen to render comes from
//! the route-to-screen [`Dispatcher`](lift_nav::Dispatcher), which also keeps
//! sub-customers away from user creation.
//!
//! ## Module Structure
//!
//! - `auth.rs` - Login, OTP and registration
//! - `dashboard.rs` - Landing screen with summaries
//! - `complaints.rs` - Ticket list, new complaint, ticket details
//! - `maintenance.rs` - Routine schedule and visit details
//! - `billing.rs` - AMC contracts, invoices, quotations
//! - `account.rs` - Profile switching and user creation
//! - `about.rs` - Company information

pub mod about;
pub mod account;
pub mod auth;
pub mod billing;
pub mod complaints;
pub mod dashboard;
pub mod maintenance;

use iced::widget::{Space, button, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use lift_model::{Route, Searchable, Session};
use lift_nav::Screen;

use crate::component::{
    EmptyState, ErrorState, LoadingState, SidebarItem, confirm_modal, error_modal, sidebar,
    view_toast,
};
use crate::message::{DataMessage, Message};
use crate::state::{AppState, ListState, Resource};
use crate::theme::{
    GRAY_400, GRAY_500, GRAY_900, PRIMARY_500, SPACING_LG, SPACING_SM, SPACING_XS, button_ghost,
    button_secondary,
};

/// Render the whole window: screen, chrome, toast and modals.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let screen = state.current_screen();
    let body = view_screen(state, screen);

    let base: Element<'_, Message> = match state.session() {
        Some(session) if !is_public(screen) => row![
            view_sidebar(&session, state.nav().route()),
            container(scrollable(container(body).padding(SPACING_LG)))
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .into(),
        _ => container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let with_toast: Element<'_, Message> = match &state.toast {
        Some(toast) => {
            let toast_row = row![
                Space::new().width(Length::Fill),
                container(view_toast(toast)).padding([0.0, 24.0]),
            ];
            let toast_layer = column![Space::new().height(Length::Fill), toast_row]
                .padding([SPACING_LG, 0.0]);
            stack![base, toast_layer].into()
        }
        None => base,
    };

    if let Some(error) = &state.error {
        error_modal(with_toast, error, Message::DismissError)
    } else if state.confirm_logout {
        confirm_modal(
            with_toast,
            "Sign out",
            "Sign out of LiftCare on this device?",
            "Sign out",
            Message::Logout,
            Message::CancelLogout,
        )
    } else {
        with_toast
    }
}

fn view_screen(state: &AppState, screen: Screen) -> Element<'_, Message> {
    match screen {
        Screen::Login => auth::view_login(state),
        Screen::Otp => auth::view_otp(state),
        Screen::Register => auth::view_register(state),
        Screen::Dashboard => dashboard::view_dashboard(state),
        Screen::Complaints => complaints::view_complaints(state),
        Screen::AddComplaint => complaints::view_add_complaint(state),
        Screen::TicketDetails => complaints::view_ticket_details(state),
        Screen::RoutineMaintenance => maintenance::view_schedule(state),
        Screen::MaintenanceDetails => maintenance::view_visit_details(state),
        Screen::AmcContracts => billing::view_contracts(state),
        Screen::Invoices => billing::view_invoices(state),
        Screen::Quotations => billing::view_quotations(state),
        Screen::AboutUs => about::view_about(state),
        Screen::CreateUser => account::view_create_user(state),
        Screen::ProfileSwitch => account::view_profile_switch(state),
    }
}

fn is_public(screen: Screen) -> bool {
    matches!(screen, Screen::Login | Screen::Otp | Screen::Register)
}

// =============================================================================
// SIDEBAR
// =============================================================================

/// Menu routes offered to `session`.
pub fn menu_for(session: &Session) -> Vec<Route> {
    Route::MENU
        .into_iter()
        .filter(|route| !(session.is_sub_customer() && *route == Route::CreateUser))
        .collect()
}

fn view_sidebar<'a>(session: &Session, current: Route) -> Element<'a, Message> {
    let routes = menu_for(session);
    let section = current.parent();
    let active = routes
        .iter()
        .position(|r| *r == current)
        .or_else(|| routes.iter().position(|r| *r == section));

    let items = routes
        .iter()
        .map(|&route| SidebarItem::new(route_icon(route), route.title(), Message::go(route)))
        .collect();

    let header = column![
        row![
            lucide::house().size(20).color(PRIMARY_500),
            text("LiftCare").size(18).color(GRAY_900),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        Space::new().height(SPACING_SM),
        text(session.display_name().to_string()).size(13).color(GRAY_900),
        text(session.role.label().to_string()).size(11).color(GRAY_500),
    ]
    .spacing(SPACING_XS);

    let footer = button(
        row![lucide::log_out().size(14), text("Sign out").size(14)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::RequestLogout)
    .width(Length::Fill)
    .padding([8.0, 12.0])
    .style(button_ghost);

    sidebar(header.into(), items, active, footer.into())
}

fn route_icon<'a>(route: Route) -> Element<'a, Message> {
    let icon = match route {
        Route::Dashboard => lucide::house(),
        Route::Complaints | Route::TicketDetails => lucide::message_square(),
        Route::AddComplaint => lucide::plus(),
        Route::RoutineMaintenance | Route::MaintenanceDetails => lucide::calendar_days(),
        Route::AmcContracts => lucide::file_text(),
        Route::Invoice => lucide::file_spreadsheet(),
        Route::Quotation => lucide::scroll_text(),
        Route::ProfileSwitch => lucide::users(),
        Route::CreateUser => lucide::user(),
        Route::AboutUs => lucide::info(),
        Route::Login | Route::Register | Route::Otp => lucide::arrow_right(),
    };
    icon.size(16).into()
}

// =============================================================================
// SHARED LIST PIECES
// =============================================================================

/// Loading, error or empty placeholder for a list, or `None` when it has
/// rows to show.
pub(crate) fn list_placeholder<'a, T: Searchable>(
    list: &ListState<T>,
    resource: Resource,
    empty_title: &'a str,
) -> Option<Element<'a, Message>> {
    if list.loading && list.items.is_empty() {
        return Some(LoadingState::new(format!("Loading {}...", resource.label())).view());
    }
    if let Some(error) = &list.error
        && list.items.is_empty()
    {
        return Some(
            ErrorState::new(format!("Could not load {}", resource.label()))
                .message(error.clone())
                .retry(Message::Data(DataMessage::Load(resource)))
                .view(),
        );
    }
    if list.items.is_empty() {
        return Some(EmptyState::new(lucide::list().size(40).color(GRAY_400), empty_title).view());
    }
    None
}

/// "Show more" button when `total` exceeds what is rendered.
pub(crate) fn show_more<'a>(resource: Resource, shown: usize, total: usize) -> Element<'a, Message> {
    if shown >= total {
        return Space::new().height(0.0).into();
    }
    container(
        button(text(format!("Show more ({} of {total})", shown)).size(13))
            .on_press(Message::Data(DataMessage::ShowMore(resource)))
            .padding([6.0, 16.0])
            .style(button_secondary),
    )
    .center_x(Length::Fill)
    .into()
}

/// Refresh button for a list header.
pub(crate) fn refresh_button<'a>(resource: Resource, loading: bool) -> Element<'a, Message> {
    button(
        row![lucide::refresh_cw().size(14), text("Refresh").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press_maybe((!loading).then_some(Message::Data(DataMessage::Load(resource))))
    .padding([6.0, 12.0])
    .style(button_secondary)
    .into()
}

/// Format an amount of money.
pub(crate) fn money(amount: f64) -> String {
    format!("₹{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lift_model::Role;

    #[test]
    fn test_sub_customer_menu_hides_create_user() {
        let owner = Session::new("1", "Owner", Role::Customer);
        let wing = Session::new("2", "Wing B", Role::SubCustomer);
        assert!(menu_for(&owner).contains(&Route::CreateUser));
        assert!(!menu_for(&wing).contains(&Route::CreateUser));
        assert_eq!(menu_for(&wing).len(), Route::MENU.len() - 1);
    }

    #[test]
    fn test_money_format() {
        assert_eq!(money(1250.5), "₹1250.50");
    }
}
