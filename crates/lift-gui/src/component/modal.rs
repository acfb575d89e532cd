//! Modal dialog overlay component.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Border, Element, Length, Shadow, Vector};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::theme::{
    BACKDROP, BORDER_RADIUS_LG, ERROR, GRAY_200, GRAY_500, GRAY_600, GRAY_900, MODAL_WIDTH,
    SHADOW_STRONG, SPACING_LG, SPACING_MD, SPACING_SM, WHITE, button_ghost, button_primary,
    button_secondary,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The dialog is centered over `base` behind a backdrop that swallows input.
/// Clicking the backdrop does not close it.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        });

    let header = row![
        text(title).size(18).color(GRAY_900),
        space::horizontal(),
        button(lucide::x().size(20).color(GRAY_500))
            .on_press(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = actions
        .into_iter()
        .fold(row![space::horizontal()].spacing(SPACING_SM), |r, action| {
            r.push(action)
        });

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH))
    .padding(SPACING_LG)
    .style(|_theme| container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow {
            color: SHADOW_STRONG,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    stack![base, opaque(backdrop), center(dialog)].into()
}

/// A modal with a message and confirm/cancel buttons.
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: &'a str,
    confirm_label: &'a str,
    on_confirm: M,
    on_cancel: M,
) -> Element<'a, M> {
    let cancel_btn: Element<'a, M> = button(text("Cancel"))
        .on_press(on_cancel.clone())
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    let confirm_btn: Element<'a, M> = button(text(confirm_label))
        .on_press(on_confirm)
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    modal(
        base,
        title,
        text(message).into(),
        on_cancel,
        vec![cancel_btn, confirm_btn],
    )
}

/// Shows a [`GuiError`] with its suggestion, if any, and a single OK button.
pub fn error_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    error: &'a GuiError,
    on_close: M,
) -> Element<'a, M> {
    let mut body = column![
        row![
            lucide::circle_alert().size(20).color(ERROR),
            text(error.to_string()).size(14).color(GRAY_900),
        ]
        .spacing(SPACING_SM)
        .align_y(iced::Alignment::Center)
    ]
    .spacing(SPACING_SM);
    if let Some(hint) = error.suggestion() {
        body = body.push(text(hint).size(13).color(GRAY_600));
    }

    let ok_btn: Element<'a, M> = button(text("OK"))
        .on_press(on_close.clone())
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    modal(base, error.title(), body.into(), on_close, vec![ok_btn])
}
