//! Company information.

use iced::widget::{Space, column, container, text};
use iced::{Element, Length};
use lift_model::Route;

use crate::component::PageHeader;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{FORM_WIDTH, GRAY_500, GRAY_700, SPACING_LG, SPACING_MD, SPACING_SM, card};

const SERVICES: [&str; 4] = [
    "Annual maintenance contracts for passenger and goods lifts",
    "Round-the-clock breakdown support",
    "Modernization and safety upgrades",
    "Statutory inspections and certification",
];

/// Signed-out visitors get a way back to the login screen.
pub fn view_about(state: &AppState) -> Element<'_, Message> {
    let services = SERVICES
        .iter()
        .fold(column![].spacing(SPACING_SM), |col, item| {
            col.push(text(format!("• {item}")).size(14).color(GRAY_700))
        });

    let body = column![
        text("LiftCare keeps your building moving. Our technicians service and repair lifts of every make, and this app is your window into their work.")
            .size(14)
            .color(GRAY_700),
        Space::new().height(SPACING_SM),
        services,
        Space::new().height(SPACING_SM),
        text(format!("Version {}", env!("CARGO_PKG_VERSION")))
            .size(12)
            .color(GRAY_500),
    ]
    .spacing(SPACING_MD);

    let mut header = PageHeader::new("About Us");
    if !state.nav().is_authenticated() {
        header = header.back(Message::go(Route::Login));
    }
    let header: Element<'_, Message> = header.view();
    column![
        header,
        container(body)
            .max_width(FORM_WIDTH)
            .width(Length::Fill)
            .padding(SPACING_LG)
            .style(card),
    ]
    .spacing(SPACING_MD)
    .into()
}
