//! Toast notification component.
//!
//! Shows a short message that auto-dismisses after a timeout.

use std::time::Duration;

use iced::time::Instant;
use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Color, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{
    ERROR, GRAY_200, GRAY_700, INFO, SHADOW, SPACING_MD, SPACING_SM, SPACING_XS, SUCCESS, WARNING,
    WHITE, button_ghost,
};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Toast notification state.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Determines the icon and accent color.
    pub kind: ToastKind,
    /// When this toast appeared. Replacing a toast restarts the timeout.
    pub shown_at: Instant,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => SUCCESS,
            Self::Info => INFO,
            Self::Warning => WARNING,
            Self::Error => ERROR,
        }
    }
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
    /// Clock tick; dismisses the toast once it has been shown long enough.
    Tick(Instant),
}

impl ToastState {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    /// Whether the toast has outlived [`TOAST_DURATION`] at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }
}

/// Renders a toast notification.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let icon_color = state.kind.color();
    let icon = match state.kind {
        ToastKind::Success => lucide::circle_check().size(18).color(icon_color),
        ToastKind::Info => lucide::info().size(18).color(icon_color),
        ToastKind::Warning => lucide::triangle_alert().size(18).color(icon_color),
        ToastKind::Error => lucide::circle_x().size(18).color(icon_color),
    };

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        text(&state.message).size(14).color(GRAY_700),
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(|_| container::Style {
            background: Some(WHITE.into()),
            border: iced::Border {
                color: GRAY_200,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: iced::Shadow {
                color: SHADOW,
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let toast = ToastState::info("Signed out");
        assert!(!toast.is_expired(toast.shown_at));
        assert!(!toast.is_expired(toast.shown_at + Duration::from_secs(4)));
        assert!(toast.is_expired(toast.shown_at + TOAST_DURATION));
    }
}
