//! Sidebar navigation component.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use crate::theme::{
    GRAY_400, SIDEBAR_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, button_row,
    sidebar as sidebar_style,
};

// =============================================================================
// SIDEBAR ITEM
// =============================================================================

/// A sidebar navigation item.
pub struct SidebarItem<'a, M> {
    pub icon: Element<'a, M>,
    pub label: String,
    pub message: M,
}

impl<'a, M> SidebarItem<'a, M> {
    pub fn new(icon: impl Into<Element<'a, M>>, label: impl Into<String>, message: M) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            message,
        }
    }
}

// =============================================================================
// SIDEBAR COMPONENT
// =============================================================================

/// A fixed-width column of navigation items between a header and a footer.
///
/// `active` is the index of the highlighted item.
pub fn sidebar<'a, M: Clone + 'a>(
    header: Element<'a, M>,
    items: Vec<SidebarItem<'a, M>>,
    active: Option<usize>,
    footer: Element<'a, M>,
) -> Element<'a, M> {
    let entries = items
        .into_iter()
        .enumerate()
        .fold(column![].spacing(SPACING_XS), |col, (index, item)| {
            let content = row![item.icon, text(item.label).size(14)]
                .spacing(SPACING_SM)
                .align_y(iced::Alignment::Center);
            col.push(
                button(content)
                    .on_press(item.message)
                    .width(Length::Fill)
                    .padding([8.0, 12.0])
                    .style(button_row(active == Some(index))),
            )
        });

    container(
        column![
            header,
            text("MENU").size(11).color(GRAY_400),
            scrollable(entries).height(Length::Fill),
            Space::new().height(SPACING_SM),
            footer,
        ]
        .spacing(SPACING_SM),
    )
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .padding(SPACING_MD)
    .style(sidebar_style)
    .into()
}
