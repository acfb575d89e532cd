//! Theme module for LiftCare.
//!
//! - Color constants (`palette`)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`style`)

pub mod palette;
pub mod spacing;
pub mod style;

use iced::Theme;
use iced::theme::Palette;

pub use palette::{
    BACKDROP, ERROR, GRAY_50, GRAY_100, GRAY_200, GRAY_400, GRAY_500, GRAY_600, GRAY_700,
    GRAY_900, INFO, PRIMARY_50, PRIMARY_500, SHADOW, SHADOW_STRONG, SUCCESS, WARNING, WHITE,
};
pub use spacing::{
    AUTH_CARD_WIDTH, BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, FORM_WIDTH,
    MODAL_WIDTH, SIDEBAR_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};
pub use style::{
    button_ghost, button_primary, button_row, button_secondary, card, sidebar, text_input_default,
};

/// The application theme.
pub fn liftcare_theme() -> Theme {
    Theme::custom(
        "LiftCare".to_string(),
        Palette {
            background: GRAY_50,
            text: GRAY_900,
            primary: PRIMARY_500,
            success: SUCCESS,
            warning: WARNING,
            danger: ERROR,
        },
    )
}
