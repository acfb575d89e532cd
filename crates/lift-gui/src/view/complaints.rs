//! Complaint list, new complaint form and ticket details.

use iced::widget::{Space, button, column, container, pick_list, row, text, toggler};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use lift_model::{Complaint, ComplaintStatus, Priority, Route};

use crate::component::{
    EmptyState, PageHeader, Status, display_field, form_field, search_box, status_badge,
};
use crate::message::{ComplaintMessage, DataMessage, Message};
use crate::state::{AppState, ComplaintField, Resource};
use crate::theme::{
    ERROR, FORM_WIDTH, GRAY_400, GRAY_500, GRAY_700, GRAY_900, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, button_primary, button_row, card,
};
use crate::view::{list_placeholder, refresh_button, show_more};

// =============================================================================
// LIST
// =============================================================================

pub fn view_complaints(state: &AppState) -> Element<'_, Message> {
    let list = &state.complaints;
    let new_button = button(
        row![lucide::plus().size(14), text("New complaint").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::go(Route::AddComplaint))
    .padding([6.0, 12.0])
    .style(button_primary);

    let header: Element<'_, Message> = PageHeader::new("Complaints")
        .meta("Total", list.items.len().to_string())
        .trailing(
            row![refresh_button(Resource::Complaints, list.loading), new_button]
                .spacing(SPACING_SM),
        )
        .view();

    if let Some(placeholder) = list_placeholder(list, Resource::Complaints, "No complaints yet") {
        return column![header, placeholder].spacing(SPACING_MD).into();
    }

    let visible = state.visible_complaints();
    let page = list.visible(state.settings.display.page_size());

    let mut rows = column![].spacing(SPACING_XS);
    if visible.is_empty() {
        rows = rows.push(text("No tickets match the current filters.").size(13).color(GRAY_500));
    }
    for complaint in visible.iter().take(page) {
        rows = rows.push(complaint_row(*complaint));
    }

    column![
        header,
        search_box(
            &list.search,
            "Search by ticket, subject or site...",
            |q| Message::Data(DataMessage::SearchChanged(Resource::Complaints, q)),
            Message::Data(DataMessage::SearchCleared(Resource::Complaints)),
        ),
        filter_bar(state),
        container(rows).padding(SPACING_SM).style(card),
        show_more(Resource::Complaints, page.min(visible.len()), visible.len()),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn filter_bar(state: &AppState) -> Element<'_, Message> {
    let chip = |label: String, filter: Option<ComplaintStatus>| {
        let selected = state.complaint_filter == filter;
        button(text(label).size(12))
            .on_press(Message::Data(DataMessage::StatusFilterChanged(filter)))
            .padding([4.0, 10.0])
            .style(button_row(selected))
    };

    let mut chips = row![chip("All".to_string(), None)].spacing(SPACING_XS);
    for status in ComplaintStatus::FILTERS {
        chips = chips.push(chip(status.label().to_string(), Some(status)));
    }

    row![
        chips,
        Space::new().width(Length::Fill),
        text("Show closed").size(12).color(GRAY_700),
        toggler(state.settings.display.show_closed_tickets)
            .on_toggle(|v| Message::Data(DataMessage::ShowClosedToggled(v))),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

fn complaint_row(complaint: &Complaint) -> Element<'_, Message> {
    button(
        row![
            column![
                text(&complaint.subject).size(14).color(GRAY_900),
                text(format!("{} · {}", complaint.reference(), complaint.site_name))
                    .size(12)
                    .color(GRAY_500),
            ]
            .spacing(2.0),
            Space::new().width(Length::Fill),
            status_badge(complaint.priority.label(), Status::from(complaint.priority)),
            status_badge(complaint.status.label(), Status::from(&complaint.status)),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(Message::go_with(Route::TicketDetails, complaint.clone()))
    .width(Length::Fill)
    .padding([8.0, 12.0])
    .style(button_row(false))
    .into()
}

// =============================================================================
// NEW COMPLAINT
// =============================================================================

pub fn view_add_complaint(state: &AppState) -> Element<'_, Message> {
    let form = &state.complaint_form;
    let draft = &form.draft;

    let priority = column![
        text("Priority").size(13).color(GRAY_700),
        pick_list(Priority::ALL.to_vec(), Some(draft.priority), |p| {
            Message::Complaint(ComplaintMessage::PriorityChanged(p))
        }),
    ]
    .spacing(SPACING_XS);

    let submit = (!form.submitting).then_some(Message::Complaint(ComplaintMessage::Submit));
    let mut body = column![
        complaint_field("Subject", &draft.subject, "What is wrong?", ComplaintField::Subject),
        complaint_field(
            "Description",
            &draft.description,
            "Details help the technician",
            ComplaintField::Description
        ),
        complaint_field("Site", &draft.site_name, "Building or site name", ComplaintField::Site),
        complaint_field(
            "Lift",
            draft.lift_id.as_deref().unwrap_or_default(),
            "Lift number (optional)",
            ComplaintField::Lift
        ),
        priority,
    ]
    .spacing(SPACING_MD);

    if let Some(error) = &form.error {
        body = body.push(text(error).size(12).color(ERROR));
    }
    body = body.push(
        button(text(if form.submitting { "Submitting..." } else { "Submit" }).size(14))
            .on_press_maybe(submit)
            .padding([10.0, 24.0])
            .style(button_primary),
    );

    let header: Element<'_, Message> = PageHeader::new("Raise a complaint")
        .back(Message::go(Route::Complaints))
        .view();

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

fn complaint_field<'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    which: ComplaintField,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        placeholder,
        move |v| Message::Complaint(ComplaintMessage::FieldChanged(which, v)),
        None,
    )
}

// =============================================================================
// DETAILS
// =============================================================================

/// The ticket handed over by the list, dashboard or new-complaint form.
pub fn view_ticket_details(state: &AppState) -> Element<'_, Message> {
    let Some(complaint) = state.nav().payload_for::<Complaint>(Route::TicketDetails) else {
        return EmptyState::new(
            lucide::message_square().size(40).color(GRAY_400),
            "No ticket selected",
        )
        .description("Open a ticket from the complaint list")
        .action("Go to complaints", Message::go(Route::Complaints))
        .centered()
        .view();
    };

    let status = Status::from(&complaint.status);
    let header: Element<'_, Message> = PageHeader::new(format!("Ticket {}", complaint.reference()))
        .back(Message::go(Route::Complaints))
        .badge(complaint.status.label().to_string(), status.color())
        .meta("Priority", complaint.priority.label())
        .view();

    let raised = complaint
        .created_at
        .map(|at| at.with_timezone(&chrono::Local).format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    let body = column![
        display_field("Subject", complaint.subject.clone()),
        display_field("Description", complaint.description.clone()),
        row![
            display_field("Site", complaint.site_name.clone()),
            display_field("Lift", complaint.lift_id.clone().unwrap_or_else(|| "-".to_string())),
        ]
        .spacing(SPACING_MD),
        row![
            display_field("Raised", raised),
            display_field(
                "Technician",
                complaint
                    .technician
                    .clone()
                    .unwrap_or_else(|| "Not assigned".to_string())
            ),
        ]
        .spacing(SPACING_MD),
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
