//! Page header component.
//!
//! ```rust,ignore
//! PageHeader::new("Ticket T-1042")
//!     .back(Message::go(Route::Complaints))
//!     .badge("Open", INFO)
//!     .meta("Site", "Sea View")
//!     .view()
//! ```

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Color, Element, Length};
use iced_fonts::lucide;

use crate::theme::{GRAY_500, GRAY_900, SPACING_MD, SPACING_SM, WHITE, button_secondary};

/// Page header with back button, badge, title, metadata and trailing actions.
pub struct PageHeader<'a, M> {
    title: String,
    on_back: Option<M>,
    badge: Option<(String, Color)>,
    metadata: Vec<(String, String)>,
    trailing: Option<Element<'a, M>>,
}

impl<'a, M: Clone + 'a> PageHeader<'a, M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            on_back: None,
            badge: None,
            metadata: Vec::new(),
            trailing: None,
        }
    }

    /// Add a back button.
    pub fn back(mut self, message: M) -> Self {
        self.on_back = Some(message);
        self
    }

    /// Add a colored badge next to the title.
    pub fn badge(mut self, text: impl Into<String>, color: Color) -> Self {
        self.badge = Some((text.into(), color));
        self
    }

    /// Add a metadata key-value pair.
    pub fn meta(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((label.into(), value.into()));
        self
    }

    /// Add trailing element(s) on the right.
    pub fn trailing(mut self, element: impl Into<Element<'a, M>>) -> Self {
        self.trailing = Some(element.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut header_row = row![].spacing(SPACING_SM).align_y(Alignment::Center);

        if let Some(on_back) = self.on_back {
            let back_btn = button(
                row![lucide::chevron_left().size(12), text("Back").size(14)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .on_press(on_back)
            .padding([8.0, 16.0])
            .style(button_secondary);
            header_row = header_row.push(back_btn).push(Space::new().width(SPACING_MD));
        }

        header_row = header_row.push(text(self.title).size(20).color(GRAY_900));

        if let Some((badge_text, badge_color)) = self.badge {
            let badge = container(text(badge_text).size(12).color(WHITE))
                .padding([3.0, 10.0])
                .style(move |_| container::Style {
                    background: Some(badge_color.into()),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                });
            header_row = header_row.push(badge);
        }

        header_row = header_row.push(Space::new().width(Length::Fill));

        for (label, value) in self.metadata {
            header_row = header_row.push(text(format!("{label}: {value}")).size(12).color(GRAY_500));
        }

        if let Some(trailing) = self.trailing {
            header_row = header_row.push(trailing);
        }

        container(header_row)
            .width(Length::Fill)
            .padding([SPACING_MD, 0.0])
            .into()
    }
}
