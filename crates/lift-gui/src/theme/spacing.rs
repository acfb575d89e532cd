//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, list rows
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - modals, toasts
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Pill radius - status badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// LAYOUT
// =============================================================================

/// Sidebar width
pub const SIDEBAR_WIDTH: f32 = 232.0;

/// Width of the centered auth card (login, OTP, register)
pub const AUTH_CARD_WIDTH: f32 = 400.0;

/// Width of form pages
pub const FORM_WIDTH: f32 = 560.0;

/// Modal width
pub const MODAL_WIDTH: f32 = 480.0;
