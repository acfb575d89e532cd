//! Form field components.
//!
//! Labelled inputs with an optional error line.

use iced::widget::{column, container, text, text_input};
use iced::{Border, Element, Length};

use crate::theme::{
    ERROR, GRAY_100, GRAY_200, GRAY_600, GRAY_900, SPACING_XS, text_input_default,
};

// =============================================================================
// FORM FIELD
// =============================================================================

/// A text field with label and optional error message.
///
/// ```rust,ignore
/// form_field("Email", &form.email, "you@company.com", Message::EmailChanged, None)
/// ```
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<&'a str>,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10.0)
        .width(Length::Fill)
        .style(if error.is_some() {
            text_input_error_style
        } else {
            text_input_default
        });

    let mut content = column![text(label).size(13).color(GRAY_600), input].spacing(SPACING_XS);
    if let Some(err) = error {
        content = content.push(text(err).size(12).color(ERROR));
    }

    container(content).width(Length::Fill).into()
}

/// Like [`form_field`], submitting with Enter.
pub fn form_field_submit<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    on_submit: Option<M>,
) -> Element<'a, M> {
    let mut input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10.0)
        .width(Length::Fill)
        .style(text_input_default);
    if let Some(message) = on_submit {
        input = input.on_submit(message);
    }

    column![text(label).size(13).color(GRAY_600), input]
        .spacing(SPACING_XS)
        .into()
}

/// A read-only value with a label.
pub fn display_field<'a, M: 'a>(label: &'a str, value: impl Into<String>) -> Element<'a, M> {
    let value_text = container(text(value.into()).size(14).color(GRAY_900))
        .padding(10.0)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(GRAY_100.into()),
            border: Border {
                radius: 4.0.into(),
                color: GRAY_200,
                width: 1.0,
            },
            ..Default::default()
        });

    column![text(label).size(13).color(GRAY_600), value_text]
        .spacing(SPACING_XS)
        .into()
}

// =============================================================================
// STYLES
// =============================================================================

fn text_input_error_style(theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input_default(theme, status);
    style.border.color = ERROR;
    style.border.width = 2.0;
    style
}
