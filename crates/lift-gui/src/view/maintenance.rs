//! Routine maintenance schedule and visit details.

use chrono::Local;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use lift_model::{MaintenanceVisit, Route};

use crate::component::{EmptyState, PageHeader, Status, display_field, search_box, status_badge};
use crate::message::{DataMessage, Message};
use crate::state::{AppState, Resource};
use crate::theme::{
    ERROR, FORM_WIDTH, GRAY_400, GRAY_500, GRAY_900, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, SUCCESS, button_row, card,
};
use crate::view::{list_placeholder, refresh_button, show_more};

pub fn view_schedule(state: &AppState) -> Element<'_, Message> {
    let list = &state.visits;
    let today = Local::now().date_naive();
    let upcoming = list.items.iter().filter(|v| v.is_upcoming(today)).count();

    let header: Element<'_, Message> = PageHeader::new("Routine Maintenance")
        .meta("Upcoming", upcoming.to_string())
        .trailing(refresh_button(Resource::Maintenance, list.loading))
        .view();

    if let Some(placeholder) = list_placeholder(list, Resource::Maintenance, "No visits scheduled") {
        return column![header, placeholder].spacing(SPACING_MD).into();
    }

    let visits = list.filtered();
    let page = list.visible(state.settings.display.page_size());
    let rows = visits
        .iter()
        .take(page)
        .fold(column![].spacing(SPACING_XS), |col, visit| {
            col.push(visit_row(*visit, visit.is_upcoming(today)))
        });

    column![
        header,
        search_box(
            &list.search,
            "Search by site, lift or technician...",
            |q| Message::Data(DataMessage::SearchChanged(Resource::Maintenance, q)),
            Message::Data(DataMessage::SearchCleared(Resource::Maintenance)),
        ),
        container(rows).padding(SPACING_SM).style(card),
        show_more(Resource::Maintenance, page.min(visits.len()), visits.len()),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn visit_row(visit: &MaintenanceVisit, upcoming: bool) -> Element<'_, Message> {
    let date = visit.scheduled_on.format("%d %b %Y").to_string();
    let lift = visit
        .lift_id
        .as_deref()
        .map(|id| format!(" · Lift {id}"))
        .unwrap_or_default();

    button(
        row![
            lucide::calendar_days()
                .size(16)
                .color(if upcoming { SUCCESS } else { GRAY_400 }),
            column![
                text(date).size(14).color(GRAY_900),
                text(format!("{}{lift}", visit.site_name))
                    .size(12)
                    .color(GRAY_500),
            ]
            .spacing(2.0),
            Space::new().width(Length::Fill),
            status_badge(visit.status.label(), Status::from(&visit.status)),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(Message::go_with(Route::MaintenanceDetails, visit.clone()))
    .width(Length::Fill)
    .padding([8.0, 12.0])
    .style(button_row(false))
    .into()
}

/// The visit handed over by the schedule.
pub fn view_visit_details(state: &AppState) -> Element<'_, Message> {
    let Some(visit) = state
        .nav()
        .payload_for::<MaintenanceVisit>(Route::MaintenanceDetails)
    else {
        return EmptyState::new(
            lucide::calendar_days().size(40).color(GRAY_400),
            "No visit selected",
        )
        .action("Go to schedule", Message::go(Route::RoutineMaintenance))
        .centered()
        .view();
    };

    let header: Element<'_, Message> =
        PageHeader::new(format!("Visit on {}", visit.scheduled_on.format("%d %b %Y")))
            .back(Message::go(Route::RoutineMaintenance))
            .badge(visit.status.label().to_string(), Status::from(&visit.status).color())
            .view();

    let failed = visit.failed_checks();
    let mut checklist = column![
        text(format!(
            "Checklist ({} of {} passed)",
            visit.checklist.len() - failed,
            visit.checklist.len()
        ))
        .size(14)
        .color(GRAY_900)
    ]
    .spacing(SPACING_XS);
    for item in &visit.checklist {
        let icon = if item.passed {
            lucide::circle_check().size(14).color(SUCCESS)
        } else {
            lucide::circle_x().size(14).color(ERROR)
        };
        checklist = checklist.push(
            row![icon, text(item.label.clone()).size(13)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
        );
    }

    let completed = visit
        .completed_on
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "-".to_string());

    let body = column![
        row![
            display_field("Site", visit.site_name.clone()),
            display_field("Lift", visit.lift_id.clone().unwrap_or_else(|| "-".to_string())),
        ]
        .spacing(SPACING_MD),
        row![
            display_field("Completed", completed),
            display_field(
                "Technician",
                visit.technician.clone().unwrap_or_else(|| "-".to_string())
            ),
        ]
        .spacing(SPACING_MD),
        display_field("Remarks", visit.remarks.clone().unwrap_or_default()),
        checklist,
    ]
    .spacing(SPACING_MD);

    column![
        header,
        container(body)
            .max_width(FORM_WIDTH)
            .padding(SPACING_LG)
            .style(card),
    ]
    .spacing(SPACING_MD)
    .into()
}
