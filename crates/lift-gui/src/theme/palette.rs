//! Color palette.

use iced::Color;

pub const WHITE: Color = Color::WHITE;

pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.99);
pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.96);
pub const GRAY_200: Color = Color::from_rgb(0.90, 0.90, 0.92);
pub const GRAY_400: Color = Color::from_rgb(0.64, 0.65, 0.68);
pub const GRAY_500: Color = Color::from_rgb(0.46, 0.47, 0.51);
pub const GRAY_600: Color = Color::from_rgb(0.35, 0.36, 0.40);
pub const GRAY_700: Color = Color::from_rgb(0.25, 0.26, 0.30);
pub const GRAY_900: Color = Color::from_rgb(0.10, 0.10, 0.12);

/// Brand blue.
pub const PRIMARY_500: Color = Color::from_rgb(0.11, 0.38, 0.72);
pub const PRIMARY_600: Color = Color::from_rgb(0.08, 0.31, 0.61);
pub const PRIMARY_700: Color = Color::from_rgb(0.06, 0.24, 0.50);
pub const PRIMARY_50: Color = Color::from_rgb(0.93, 0.96, 1.00);

pub const SUCCESS: Color = Color::from_rgb(0.20, 0.66, 0.38);
pub const WARNING: Color = Color::from_rgb(0.93, 0.62, 0.05);
pub const ERROR: Color = Color::from_rgb(0.85, 0.25, 0.25);
pub const INFO: Color = Color::from_rgb(0.23, 0.51, 0.96);

/// Modal backdrop.
pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);
pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.10);
pub const SHADOW_STRONG: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.22);
