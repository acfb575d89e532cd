//! Empty, loading and error state components.
//!
//! ```rust,ignore
//! EmptyState::new(lucide::list().size(48), "No complaints yet")
//!     .description("Tickets you raise will appear here")
//!     .action("Raise a complaint", Message::go(Route::AddComplaint))
//!     .centered()
//!     .view()
//! ```

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::{
    ERROR, GRAY_400, GRAY_500, GRAY_600, GRAY_700, SPACING_LG, SPACING_MD, SPACING_SM, WHITE,
    button_primary, button_secondary,
};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, description and optional action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
    centered: bool,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
            centered: false,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Center the content in a full-size container.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, Space::new().height(SPACING_MD)]
            .push(text(self.title).size(16).color(GRAY_600));

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).color(GRAY_500));
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text(label).size(14).color(WHITE))
                    .on_press(message)
                    .padding([10.0, 24.0])
                    .style(button_primary),
            );
        }

        wrap(content.align_x(Alignment::Center).into(), self.centered)
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Placeholder shown while a fetch is in flight.
pub struct LoadingState {
    title: String,
}

impl LoadingState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let content = column![
            lucide::loader().size(32).color(GRAY_400),
            Space::new().height(SPACING_MD),
            text(self.title).size(14).color(GRAY_700),
        ]
        .align_x(Alignment::Center);
        wrap(content.into(), false)
    }
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// Failed fetch with an optional retry button.
pub struct ErrorState<M> {
    title: String,
    message: Option<String>,
    retry: Option<M>,
}

impl<M: Clone> ErrorState<M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            retry: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn retry(mut self, message: M) -> Self {
        self.retry = Some(message);
        self
    }

    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let mut content = column![
            lucide::circle_alert().size(40).color(ERROR),
            Space::new().height(SPACING_MD),
            text(self.title).size(16).color(GRAY_700),
        ]
        .align_x(Alignment::Center);

        if let Some(message) = self.message {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(message).size(13).color(GRAY_500));
        }
        if let Some(retry) = self.retry {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text("Retry").size(14))
                    .on_press(retry)
                    .padding([8.0, 20.0])
                    .style(button_secondary),
            );
        }
        wrap(content.into(), false)
    }
}

fn wrap<'a, M: 'a>(content: Element<'a, M>, centered: bool) -> Element<'a, M> {
    if centered {
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Shrink)
            .center_y(Length::Shrink)
            .into()
    } else {
        container(content)
            .width(Length::Fill)
            .center_x(Length::Shrink)
            .into()
    }
}
