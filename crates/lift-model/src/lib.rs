//! Data model for the LiftCare customer portal.
//!
//! This crate holds every type that crosses a crate boundary:
//!
//! - [`route`]: The closed set of screens the application can show
//! - [`session`]: The logged-in identity and its role
//! - [`contract`], [`complaint`], [`maintenance`], [`billing`], [`profile`]:
//!   Backend entities with one declared serde schema each
//! - [`search`]: In-memory text filtering used by list screens
//!
//! # Decoding policy
//!
//! Backend payloads are decoded through a single declared shape per entity.
//! Each field accepts a short, documented list of alternative names via
//! `#[serde(alias)]`, optional fields fall back to their defaults, and status
//! strings are normalized before matching so that `"In Progress"`,
//! `"in_progress"` and `"IN-PROGRESS"` decode to the same variant. Anything
//! outside that policy is a decode error surfaced to the caller.

pub mod billing;
pub mod complaint;
pub mod contract;
pub mod error;
pub mod maintenance;
pub mod profile;
pub mod route;
pub mod search;
pub mod session;

mod de;

pub use billing::{Invoice, Quotation, QuotationStatus};
pub use complaint::{Complaint, ComplaintDraft, ComplaintStatus, Priority};
pub use contract::{AmcContract, ContractStatus};
pub use error::{ModelError, Result};
pub use maintenance::{ChecklistItem, MaintenanceVisit, VisitStatus};
pub use profile::{CustomerProfile, NewUser, Registration};
pub use route::{Route, RouteParseError};
pub use search::{Searchable, filter_items};
pub use session::{Role, Session};

/// Normalize a free-form label for matching.
///
/// Lowercases and drops separators (`-`, `_`, whitespace) so that
/// `"Sub-Customer"`, `"sub_customer"` and `"SUBCUSTOMER"` compare equal.
pub fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
