//! Complaints (service tickets) and the form used to file one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, max_len, require};
use crate::normalize_label;
use crate::search::Searchable;

/// Maximum subject length accepted by the backend.
pub const SUBJECT_MAX_LEN: usize = 120;

// =============================================================================
// STATUS & PRIORITY
// =============================================================================

/// Ticket lifecycle status.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplaintStatus {
    /// Filed, not yet picked up.
    #[default]
    Open,
    /// Assigned to a technician.
    InProgress,
    /// Fixed, awaiting customer confirmation.
    Resolved,
    /// Closed.
    Closed,
    /// Unrecognized status string.
    Other(String),
}

impl ComplaintStatus {
    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Other(s) => s,
        }
    }

    /// Check if the ticket still needs attention.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }

    /// Statuses offered in the list filter.
    pub const FILTERS: [ComplaintStatus; 4] =
        [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];
}

impl From<String> for ComplaintStatus {
    fn from(s: String) -> Self {
        match normalize_label(&s).as_str() {
            "open" | "new" | "pending" | "" => Self::Open,
            "inprogress" | "assigned" | "ongoing" => Self::InProgress,
            "resolved" | "completed" | "done" => Self::Resolved,
            "closed" | "cancelled" => Self::Closed,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl From<ComplaintStatus> for String {
    fn from(status: ComplaintStatus) -> Self {
        match status {
            ComplaintStatus::Open => "open".to_string(),
            ComplaintStatus::InProgress => "in_progress".to_string(),
            ComplaintStatus::Resolved => "resolved".to_string(),
            ComplaintStatus::Closed => "closed".to_string(),
            ComplaintStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ticket priority.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Cosmetic or scheduled work.
    Low,
    /// Default priority.
    #[default]
    Medium,
    /// Lift degraded.
    High,
    /// Lift out of service or passenger trapped.
    Critical,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Get the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match normalize_label(&s).as_str() {
            "low" => Self::Low,
            "high" | "urgent" => Self::High,
            "critical" | "emergency" => Self::Critical,
            _ => Self::Medium,
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.label().to_lowercase()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// COMPLAINT
// =============================================================================

/// A filed complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    /// Backend identifier. Also accepted as `complaint_id`.
    #[serde(alias = "complaint_id", deserialize_with = "crate::de::id")]
    pub id: String,

    /// Human-facing ticket number. Also accepted as `ticket_no`.
    #[serde(default, alias = "ticket_no")]
    pub ticket_number: String,

    /// Short summary. Also accepted as `title`.
    #[serde(default, alias = "title")]
    pub subject: String,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Building/site name. Also accepted as `site`.
    #[serde(default, alias = "site")]
    pub site_name: String,

    /// Lift identifier at the site. Also accepted as `elevator_id`.
    #[serde(default, alias = "elevator_id", deserialize_with = "crate::de::opt_id")]
    pub lift_id: Option<String>,

    /// Lifecycle status.
    #[serde(default)]
    pub status: ComplaintStatus,

    /// Priority.
    #[serde(default)]
    pub priority: Priority,

    /// When the ticket was filed.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Assigned technician.
    #[serde(default, alias = "technician_name")]
    pub technician: Option<String>,
}

impl Complaint {
    /// Get the ticket number, falling back to the backend id.
    pub fn reference(&self) -> &str {
        if self.ticket_number.is_empty() {
            &self.id
        } else {
            &self.ticket_number
        }
    }
}

impl Searchable for Complaint {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.reference(),
            self.subject,
            self.site_name,
            self.status.label(),
            self.technician.as_deref().unwrap_or_default()
        )
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Form state for a new complaint.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    /// Customer account filing the complaint.
    pub customer_id: String,
    /// Short summary.
    pub subject: String,
    /// Free-text description.
    pub description: String,
    /// Building/site name.
    pub site_name: String,
    /// Lift identifier at the site, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lift_id: Option<String>,
    /// Priority.
    pub priority: Priority,
}

impl ComplaintDraft {
    /// Check the draft before submitting it.
    pub fn validate(&self) -> Result<()> {
        require("Subject", &self.subject)?;
        max_len("Subject", self.subject.trim(), SUBJECT_MAX_LEN)?;
        require("Description", &self.description)?;
        require("Site", &self.site_name)?;
        Ok(())
    }

    /// Return a copy with surrounding whitespace removed and a blank lift id dropped.
    pub fn normalized(&self) -> Self {
        Self {
            customer_id: self.customer_id.trim().to_string(),
            subject: self.subject.trim().to_string(),
            description: self.description.trim().to_string(),
            site_name: self.site_name.trim().to_string(),
            lift_id: self
                .lift_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            priority: self.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    #[test]
    fn test_status_normalization() {
        assert_eq!(
            ComplaintStatus::from("In Progress".to_string()),
            ComplaintStatus::InProgress
        );
        assert_eq!(
            ComplaintStatus::from("IN-PROGRESS".to_string()),
            ComplaintStatus::InProgress
        );
        assert_eq!(
            ComplaintStatus::from("completed".to_string()),
            ComplaintStatus::Resolved
        );
        assert_eq!(
            ComplaintStatus::from("Escalated".to_string()),
            ComplaintStatus::Other("Escalated".to_string())
        );
    }

    #[test]
    fn test_unknown_priority_is_medium() {
        assert_eq!(Priority::from("whenever".to_string()), Priority::Medium);
        assert_eq!(Priority::from("URGENT".to_string()), Priority::High);
    }

    #[test]
    fn test_decode_complaint() {
        let json = r#"{
            "complaint_id": 901,
            "ticket_no": "TKT-0901",
            "title": "Door not closing",
            "site": "Sea View Towers",
            "elevator_id": 2,
            "status": "in_progress",
            "priority": "high",
            "created_at": "2025-03-04T09:30:00Z"
        }"#;
        let c: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "901");
        assert_eq!(c.reference(), "TKT-0901");
        assert_eq!(c.subject, "Door not closing");
        assert_eq!(c.lift_id.as_deref(), Some("2"));
        assert_eq!(c.status, ComplaintStatus::InProgress);
        assert_eq!(c.priority, Priority::High);
        assert!(c.created_at.is_some());
        assert!(c.technician.is_none());
    }

    #[test]
    fn test_reference_falls_back_to_id() {
        let c: Complaint = serde_json::from_str(r#"{"id": "c-1"}"#).unwrap();
        assert_eq!(c.reference(), "c-1");
        assert_eq!(c.status, ComplaintStatus::Open);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = ComplaintDraft {
            customer_id: "4".into(),
            subject: "Noise in cabin".into(),
            description: "Grinding noise between floors 3 and 4".into(),
            site_name: "Block A".into(),
            lift_id: None,
            priority: Priority::Medium,
        };
        assert!(draft.validate().is_ok());

        draft.subject = "   ".into();
        assert_eq!(
            draft.validate(),
            Err(ModelError::MissingField { field: "Subject" })
        );

        draft.subject = "x".repeat(SUBJECT_MAX_LEN + 1);
        assert!(matches!(
            draft.validate(),
            Err(ModelError::TooLong { field: "Subject", .. })
        ));
    }

    #[test]
    fn test_draft_normalized_drops_blank_lift() {
        let draft = ComplaintDraft {
            subject: "  Stuck  ".into(),
            lift_id: Some("  ".into()),
            ..Default::default()
        };
        let n = draft.normalized();
        assert_eq!(n.subject, "Stuck");
        assert_eq!(n.lift_id, None);
    }
}
