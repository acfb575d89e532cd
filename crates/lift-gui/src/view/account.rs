//! Profile switching and sub-customer creation.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use lift_model::{CustomerProfile, Route};

use crate::component::{PageHeader, Status, form_field, search_box, status_badge};
use crate::message::{AccountMessage, DataMessage, Message};
use crate::state::{AppState, NewUserField, Resource};
use crate::theme::{
    ERROR, FORM_WIDTH, GRAY_500, GRAY_900, PRIMARY_500, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, button_primary, button_row, card,
};
use crate::view::{list_placeholder, refresh_button};

pub fn view_profile_switch(state: &AppState) -> Element<'_, Message> {
    let list = &state.profiles;
    let current = state.session().map(|s| s.user_id).unwrap_or_default();

    let header: Element<'_, Message> = PageHeader::new("Switch Profile")
        .trailing(refresh_button(Resource::Profiles, list.loading))
        .view();

    if let Some(placeholder) = list_placeholder(list, Resource::Profiles, "No other profiles") {
        return column![header, placeholder].spacing(SPACING_MD).into();
    }

    let rows = list
        .filtered()
        .into_iter()
        .fold(column![].spacing(SPACING_XS), |col, profile| {
            col.push(profile_row(profile, profile.id == current))
        });

    column![
        header,
        search_box(
            &list.search,
            "Search profiles...",
            |q| Message::Data(DataMessage::SearchChanged(Resource::Profiles, q)),
            Message::Data(DataMessage::SearchCleared(Resource::Profiles)),
        ),
        container(rows).padding(SPACING_SM).style(card),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn profile_row(profile: &CustomerProfile, is_current: bool) -> Element<'_, Message> {
    let subtitle = match &profile.site_name {
        Some(site) => format!("{} · {site}", profile.email),
        None => profile.email.clone(),
    };
    let mut line = row![
        lucide::user()
            .size(16)
            .color(if is_current { PRIMARY_500 } else { GRAY_500 }),
        column![
            text(&profile.name).size(14).color(GRAY_900),
            text(subtitle).size(12).color(GRAY_500),
        ]
        .spacing(2.0),
        Space::new().width(Length::Fill),
        status_badge(profile.role.label(), Status::Neutral),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);
    if is_current {
        line = line.push(status_badge("Current", Status::Info));
    }

    button(line)
        .on_press_maybe(
            (!is_current).then(|| Message::Account(AccountMessage::SwitchProfile(profile.clone()))),
        )
        .width(Length::Fill)
        .padding([8.0, 12.0])
        .style(button_row(is_current))
        .into()
}

/// Create a sub-customer. Sub-customer sessions never reach this screen.
pub fn view_create_user(state: &AppState) -> Element<'_, Message> {
    let form = &state.new_user_form;
    let submit = (!form.submitting).then_some(Message::Account(AccountMessage::SubmitNewUser));

    let mut body = column![
        user_field("Name", &form.form.name, "Full name", NewUserField::Name),
        user_field("Email", &form.form.email, "name@company.com", NewUserField::Email),
        user_field("Phone", &form.form.phone, "10-digit mobile", NewUserField::Phone),
        user_field(
            "Site",
            form.form.site_name.as_deref().unwrap_or_default(),
            "Site the user looks after (optional)",
            NewUserField::Site
        ),
    ]
    .spacing(SPACING_MD);
    if let Some(error) = &form.error {
        body = body.push(text(error).size(12).color(ERROR));
    }
    body = body.push(
        button(text(if form.submitting { "Creating..." } else { "Create user" }).size(14))
            .on_press_maybe(submit)
            .padding([10.0, 24.0])
            .style(button_primary),
    );

    let header: Element<'_, Message> = PageHeader::new("Create User")
        .back(Message::go(Route::ProfileSwitch))
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

fn user_field<'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    which: NewUserField,
) -> Element<'a, Message> {
    form_field(
        label,
        value,
        placeholder,
        move |v| Message::Account(AccountMessage::NewUserChanged(which, v)),
        None,
    )
}
