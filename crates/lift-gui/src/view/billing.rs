//! AMC contracts, invoices and quotations.

use chrono::{Local, NaiveDate};
use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};
use lift_model::{AmcContract, Invoice, Quotation, Searchable, billing};

use crate::component::{PageHeader, Status, search_box, status_badge};
use crate::message::{DataMessage, Message};
use crate::state::{AppState, ListState, Resource};
use crate::theme::{
    GRAY_200, GRAY_500, GRAY_700, GRAY_900, SPACING_MD, SPACING_SM, SPACING_XS, card,
};
use crate::view::{list_placeholder, money, refresh_button, show_more};

pub fn view_contracts(state: &AppState) -> Element<'_, Message> {
    let today = Local::now().date_naive();
    let active = state
        .contracts
        .items
        .iter()
        .filter(|c| c.is_active_on(today))
        .count();
    list_screen(
        state,
        &state.contracts,
        Resource::Contracts,
        "AMC Contracts",
        "No contracts on file",
        format!("{active} active"),
        |contract| contract_row(contract, today),
        |items| billing::total(items.iter().map(|c| &c.amount)),
    )
}

pub fn view_invoices(state: &AppState) -> Element<'_, Message> {
    let today = Local::now().date_naive();
    let unpaid: Vec<f64> = state
        .invoices
        .items
        .iter()
        .filter(|i| !i.paid)
        .map(|i| i.amount)
        .collect();
    list_screen(
        state,
        &state.invoices,
        Resource::Invoices,
        "Invoices",
        "No invoices yet",
        format!("Outstanding {}", money(billing::total(&unpaid))),
        |invoice| invoice_row(invoice, today),
        |items| billing::total(items.iter().map(|i| &i.amount)),
    )
}

pub fn view_quotations(state: &AppState) -> Element<'_, Message> {
    let pending = state
        .quotations
        .items
        .iter()
        .filter(|q| q.status == lift_model::QuotationStatus::Pending)
        .count();
    list_screen(
        state,
        &state.quotations,
        Resource::Quotations,
        "Quotations",
        "No quotations yet",
        format!("{pending} awaiting decision"),
        quotation_row,
        |items| billing::total(items.iter().map(|q| &q.amount)),
    )
}

// =============================================================================
// SHARED LAYOUT
// =============================================================================

/// Header, search, rows and a total for the filtered rows.
#[allow(clippy::too_many_arguments)]
fn list_screen<'a, T: Searchable>(
    state: &'a AppState,
    list: &'a ListState<T>,
    resource: Resource,
    title: &'a str,
    empty_title: &'a str,
    summary: String,
    render: impl Fn(&'a T) -> Element<'a, Message>,
    sum: impl Fn(&[&'a T]) -> f64,
) -> Element<'a, Message> {
    let header: Element<'a, Message> = PageHeader::new(title)
        .meta("Summary", summary)
        .trailing(refresh_button(resource, list.loading))
        .view();

    if let Some(placeholder) = list_placeholder(list, resource, empty_title) {
        return column![header, placeholder].spacing(SPACING_MD).into();
    }

    let items = list.filtered();
    let page = list.visible(state.settings.display.page_size());
    let rows = items
        .iter()
        .take(page)
        .fold(column![].spacing(SPACING_XS), |col, item| col.push(render(*item)));

    let footer = row![
        text(format!("{} item(s)", items.len())).size(12).color(GRAY_500),
        Space::new().width(Length::Fill),
        text(format!("Total {}", money(sum(&items)))).size(14).color(GRAY_900),
    ]
    .align_y(Alignment::Center);

    column![
        header,
        search_box(
            &list.search,
            "Search...",
            move |q| Message::Data(DataMessage::SearchChanged(resource, q)),
            Message::Data(DataMessage::SearchCleared(resource)),
        ),
        container(column![rows, divider(), footer].spacing(SPACING_SM))
            .padding(SPACING_MD)
            .style(card),
        show_more(resource, page.min(items.len()), items.len()),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn divider<'a>() -> Element<'a, Message> {
    container(Space::new().height(1.0))
        .width(Length::Fill)
        .style(|_| container::Style {
            background: Some(GRAY_200.into()),
            ..Default::default()
        })
        .into()
}

fn line<'a>(
    title: String,
    subtitle: String,
    amount: f64,
    badge: Element<'a, Message>,
) -> Element<'a, Message> {
    row![
        column![
            text(title).size(14).color(GRAY_900),
            text(subtitle).size(12).color(GRAY_500),
        ]
        .spacing(2.0),
        Space::new().width(Length::Fill),
        text(money(amount)).size(14).color(GRAY_700),
        badge,
    ]
    .spacing(SPACING_MD)
    .padding([6.0, 4.0])
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// ROWS
// =============================================================================

fn contract_row<'a>(contract: &'a AmcContract, today: NaiveDate) -> Element<'a, Message> {
    let remaining = contract.days_remaining(today);
    let subtitle = format!(
        "{} · {} lift(s) · {} to {}{}",
        contract.site_name,
        contract.lift_count,
        contract.start_date.format("%d %b %Y"),
        contract.end_date.format("%d %b %Y"),
        if (0..=30).contains(&remaining) {
            format!(" · {remaining} day(s) left")
        } else {
            String::new()
        }
    );
    line(
        contract.contract_number.clone(),
        subtitle,
        contract.amount,
        status_badge(contract.status.label(), Status::from(&contract.status)),
    )
}

fn invoice_row<'a>(invoice: &'a Invoice, today: NaiveDate) -> Element<'a, Message> {
    let due = invoice
        .due_on
        .map(|d| format!(" · due {}", d.format("%d %b %Y")))
        .unwrap_or_default();
    let badge = if invoice.paid {
        status_badge("Paid", Status::Success)
    } else if invoice.is_overdue(today) {
        status_badge("Overdue", Status::Error)
    } else {
        status_badge("Unpaid", Status::Warning)
    };
    line(
        invoice.invoice_number.clone(),
        format!(
            "{} · issued {}{due}",
            invoice.description,
            invoice.issued_on.format("%d %b %Y")
        ),
        invoice.amount,
        badge,
    )
}

fn quotation_row(quotation: &Quotation) -> Element<'_, Message> {
    let valid = quotation
        .valid_until
        .map(|d| format!(" · valid until {}", d.format("%d %b %Y")))
        .unwrap_or_default();
    let title = if quotation.description.is_empty() {
        quotation.quotation_number.clone()
    } else {
        format!("{} · {}", quotation.quotation_number, quotation.description)
    };
    line(
        title,
        format!("Issued {}{valid}", quotation.issued_on.format("%d %b %Y")),
        quotation.amount,
        status_badge(quotation.status.label(), Status::from(&quotation.status)),
    )
}
