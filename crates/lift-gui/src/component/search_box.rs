//! Search box component.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_MD, GRAY_200, GRAY_400, SPACING_SM, WHITE, button_ghost, text_input_default,
};

/// A text input with a search icon and a clear button while text is present.
///
/// ```rust,ignore
/// search_box(&list.search, "Search tickets...", |q| Message::Data(DataMessage::SearchChanged(Resource::Complaints, q)), clear)
/// ```
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding([8.0, 8.0])
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![
        container(lucide::search().size(14).color(GRAY_400))
            .width(Length::Fixed(28.0))
            .center_x(Length::Shrink),
        input,
    ]
    .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(lucide::x().size(14).color(GRAY_400))
                .on_press(on_clear)
                .padding([4.0, 8.0])
                .style(button_ghost),
        );
    }

    container(content)
        .width(Length::Fill)
        .padding([0.0, SPACING_SM])
        .style(|_| container::Style {
            background: Some(WHITE.into()),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: BORDER_RADIUS_MD.into(),
            },
            ..Default::default()
        })
        .into()
}
