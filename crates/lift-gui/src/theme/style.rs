//! Widget style functions.
//!
//! Style functions receive `&Theme` so they can be passed straight to
//! `.style(...)`:
//!
//! ```rust,ignore
//! button(text("Save")).style(button_primary)
//! ```

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::palette::{
    GRAY_100, GRAY_200, GRAY_400, GRAY_500, GRAY_700, GRAY_900, PRIMARY_50, PRIMARY_500,
    PRIMARY_600, PRIMARY_700, SHADOW, WHITE,
};
use super::spacing::{BORDER_RADIUS_MD, BORDER_RADIUS_SM};

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    }
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => PRIMARY_500,
        button::Status::Hovered => PRIMARY_600,
        button::Status::Pressed => PRIMARY_700,
        button::Status::Disabled => GRAY_200,
    };
    button::Style {
        background: Some(background.into()),
        text_color: if status == button::Status::Disabled {
            GRAY_500
        } else {
            WHITE
        },
        border: rounded(BORDER_RADIUS_SM),
        shadow: Shadow {
            color: SHADOW,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - outlined.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => GRAY_100,
        button::Status::Pressed => GRAY_200,
        button::Status::Active | button::Status::Disabled => WHITE,
    };
    button::Style {
        background: Some(background.into()),
        text_color: if status == button::Status::Disabled {
            GRAY_400
        } else {
            GRAY_700
        },
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: GRAY_200,
        },
        ..Default::default()
    }
}

/// Ghost button style - text only.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(PRIMARY_50.into()),
        button::Status::Pressed => Some(GRAY_100.into()),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background,
        text_color: PRIMARY_500,
        border: rounded(BORDER_RADIUS_SM),
        ..Default::default()
    }
}

/// Sidebar / list row style. Selected rows are tinted.
pub fn button_row(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match (selected, status) {
            (true, _) => Some(PRIMARY_50.into()),
            (false, button::Status::Hovered) => Some(GRAY_100.into()),
            (false, _) => None,
        };
        button::Style {
            background,
            text_color: if selected { PRIMARY_600 } else { GRAY_700 },
            border: rounded(BORDER_RADIUS_MD),
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// White card with a thin border.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow {
            color: SHADOW,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Sidebar background.
pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            width: 1.0,
            color: GRAY_200,
            ..Default::default()
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => PRIMARY_500,
        text_input::Status::Hovered => GRAY_400,
        text_input::Status::Active | text_input::Status::Disabled => GRAY_200,
    };
    text_input::Style {
        background: Background::Color(if matches!(status, text_input::Status::Disabled) {
            GRAY_100
        } else {
            WHITE
        }),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: GRAY_500,
        placeholder: GRAY_400,
        value: GRAY_900,
        selection: PRIMARY_50,
    }
}
