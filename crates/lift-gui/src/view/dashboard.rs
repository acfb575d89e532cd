//! Dashboard: summaries of the customer's tickets, contracts and invoices.

use chrono::Local;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use lift_model::{Complaint, Route, billing};

use crate::component::{PageHeader, Status, status_badge};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    ERROR, GRAY_500, GRAY_700, GRAY_900, PRIMARY_500, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, SUCCESS, WARNING, button_primary, button_row, button_secondary, card,
};
use crate::view::money;

/// Tickets listed under "Recent complaints".
const RECENT_TICKETS: usize = 5;

pub fn view_dashboard(state: &AppState) -> Element<'_, Message> {
    let today = Local::now().date_naive();
    let name = state
        .session()
        .map(|s| s.display_name().to_string())
        .unwrap_or_default();

    let open_tickets = state
        .complaints
        .items
        .iter()
        .filter(|c| c.status.is_active())
        .count();
    let active_contracts = state
        .contracts
        .items
        .iter()
        .filter(|c| c.is_active_on(today))
        .count();
    let unpaid: Vec<f64> = state
        .invoices
        .items
        .iter()
        .filter(|i| !i.paid)
        .map(|i| i.amount)
        .collect();
    let overdue = state
        .invoices
        .items
        .iter()
        .filter(|i| i.is_overdue(today))
        .count();

    let stats = row![
        stat_card(
            "Open tickets",
            open_tickets.to_string(),
            if open_tickets > 0 { WARNING } else { SUCCESS },
            Route::Complaints,
        ),
        stat_card(
            "Active contracts",
            active_contracts.to_string(),
            PRIMARY_500,
            Route::AmcContracts,
        ),
        stat_card(
            "Outstanding",
            money(billing::total(&unpaid)),
            if overdue > 0 { ERROR } else { GRAY_700 },
            Route::Invoice,
        ),
    ]
    .spacing(SPACING_MD);

    let actions = row![
        button(
            row![lucide::plus().size(14), text("Raise a complaint").size(14)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .on_press(Message::go(Route::AddComplaint))
        .padding([8.0, 16.0])
        .style(button_primary),
        button(text("Maintenance schedule").size(14))
            .on_press(Message::go(Route::RoutineMaintenance))
            .padding([8.0, 16.0])
            .style(button_secondary),
    ]
    .spacing(SPACING_SM);

    let header: Element<'_, Message> = PageHeader::new(format!("Welcome, {name}")).view();
    let mut content = column![
        header,
        stats,
        actions,
    ]
    .spacing(SPACING_LG);

    if overdue > 0 {
        content = content.push(
            text(format!("{overdue} invoice(s) past their due date"))
                .size(13)
                .color(ERROR),
        );
    }

    content
        .push(recent_complaints(&state.complaints.items))
        .into()
}

fn stat_card<'a>(
    label: &'a str,
    value: String,
    accent: iced::Color,
    target: Route,
) -> Element<'a, Message> {
    let tile = button(
        column![
            text(label).size(12).color(GRAY_500),
            text(value).size(26).color(accent),
        ]
        .spacing(SPACING_XS),
    )
    .on_press(Message::go(target))
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(button_row(false));

    container(tile).width(Length::Fill).style(card).into()
}

fn recent_complaints(complaints: &[Complaint]) -> Element<'_, Message> {
    let mut list = column![text("Recent complaints").size(15).color(GRAY_900)].spacing(SPACING_SM);

    if complaints.is_empty() {
        list = list.push(text("No complaints raised yet.").size(13).color(GRAY_500));
    }
    for complaint in complaints.iter().take(RECENT_TICKETS) {
        list = list.push(
            button(
                row![
                    text(complaint.reference()).size(13).color(GRAY_500),
                    text(&complaint.subject).size(14).color(GRAY_900),
                    Space::new().width(Length::Fill),
                    status_badge(complaint.status.label(), Status::from(&complaint.status)),
                ]
                .spacing(SPACING_MD)
                .align_y(Alignment::Center),
            )
            .on_press(Message::go_with(Route::TicketDetails, complaint.clone()))
            .width(Length::Fill)
            .padding([8.0, 12.0])
            .style(button_row(false)),
        );
    }

    container(list)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(card)
        .into()
}
