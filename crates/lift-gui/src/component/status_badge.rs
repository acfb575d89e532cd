//! Status badge component.
//!
//! Pill-shaped indicators for ticket, contract, visit and quotation states.

use iced::widget::{container, text};
use iced::{Border, Color, Element};
use lift_model::{ComplaintStatus, ContractStatus, Priority, QuotationStatus, VisitStatus};

use crate::theme::{BORDER_RADIUS_FULL, ERROR, GRAY_100, GRAY_500, INFO, SUCCESS, WARNING};

// =============================================================================
// STATUS ENUM
// =============================================================================

/// Status type for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl Status {
    /// Foreground color.
    pub fn color(&self) -> Color {
        match self {
            Status::Success => SUCCESS,
            Status::Warning => WARNING,
            Status::Error => ERROR,
            Status::Info => INFO,
            Status::Neutral => GRAY_500,
        }
    }

    /// Tinted background.
    pub fn background(&self) -> Color {
        match self {
            Status::Neutral => GRAY_100,
            other => Color {
                a: 0.14,
                ..other.color()
            },
        }
    }
}

impl From<&ComplaintStatus> for Status {
    fn from(status: &ComplaintStatus) -> Self {
        match status {
            ComplaintStatus::Open => Status::Warning,
            ComplaintStatus::InProgress => Status::Info,
            ComplaintStatus::Resolved => Status::Success,
            ComplaintStatus::Closed | ComplaintStatus::Other(_) => Status::Neutral,
        }
    }
}

impl From<&ContractStatus> for Status {
    fn from(status: &ContractStatus) -> Self {
        match status {
            ContractStatus::Active => Status::Success,
            ContractStatus::PendingRenewal => Status::Warning,
            ContractStatus::Expired => Status::Error,
            ContractStatus::Other(_) => Status::Neutral,
        }
    }
}

impl From<&VisitStatus> for Status {
    fn from(status: &VisitStatus) -> Self {
        match status {
            VisitStatus::Scheduled => Status::Info,
            VisitStatus::Completed => Status::Success,
            VisitStatus::Missed => Status::Error,
            VisitStatus::Other(_) => Status::Neutral,
        }
    }
}

impl From<&QuotationStatus> for Status {
    fn from(status: &QuotationStatus) -> Self {
        match status {
            QuotationStatus::Pending => Status::Warning,
            QuotationStatus::Accepted => Status::Success,
            QuotationStatus::Rejected => Status::Error,
            QuotationStatus::Other(_) => Status::Neutral,
        }
    }
}

impl From<Priority> for Status {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => Status::Neutral,
            Priority::Medium => Status::Info,
            Priority::High => Status::Warning,
            Priority::Critical => Status::Error,
        }
    }
}

// =============================================================================
// STATUS BADGE
// =============================================================================

/// A pill-shaped badge colored by `status`.
///
/// ```rust,ignore
/// let badge = status_badge(complaint.status.label(), Status::from(&complaint.status));
/// ```
pub fn status_badge<'a, M: 'a>(label: impl Into<String>, status: Status) -> Element<'a, M> {
    let bg_color = status.background();

    container(text(label.into()).size(12).color(status.color()))
        .padding([4.0, 10.0])
        .style(move |_theme| container::Style {
            background: Some(bg_color.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_states_are_neutral() {
        assert_eq!(
            Status::from(&ComplaintStatus::Other("Escalated".into())),
            Status::Neutral
        );
        assert_eq!(Status::from(&ContractStatus::Expired), Status::Error);
        assert_eq!(Status::from(Priority::Critical), Status::Error);
    }
}
