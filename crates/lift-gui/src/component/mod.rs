//! Reusable UI components.
//!
//! Builders and free functions returning `Element`s, shared across views.

mod empty_state;
mod form_field;
mod modal;
mod page_header;
mod search_box;
mod sidebar;
mod status_badge;
pub mod toast;

pub use empty_state::{EmptyState, ErrorState, LoadingState};
pub use form_field::{display_field, form_field, form_field_submit};
pub use modal::{confirm_modal, error_modal, modal};
pub use page_header::PageHeader;
pub use search_box::search_box;
pub use sidebar::{SidebarItem, sidebar};
pub use status_badge::{Status, status_badge};
pub use toast::{TOAST_DURATION, ToastKind, ToastMessage, ToastState, view_toast};

/// Lucide icon font, loaded once at startup.
pub use iced_fonts::LUCIDE_FONT_BYTES;
