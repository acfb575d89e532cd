//! Routine maintenance visits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize_label;
use crate::search::Searchable;

/// Visit status.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisitStatus {
    /// Planned, not yet done.
    #[default]
    Scheduled,
    /// Carried out.
    Completed,
    /// Planned date passed without a visit.
    Missed,
    /// Unrecognized status string.
    Other(String),
}

impl VisitStatus {
    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Missed => "Missed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for VisitStatus {
    fn from(s: String) -> Self {
        match normalize_label(&s).as_str() {
            "scheduled" | "upcoming" | "planned" | "" => Self::Scheduled,
            "completed" | "done" => Self::Completed,
            "missed" | "overdue" => Self::Missed,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl From<VisitStatus> for String {
    fn from(status: VisitStatus) -> Self {
        match status {
            VisitStatus::Scheduled => "scheduled".to_string(),
            VisitStatus::Completed => "completed".to_string(),
            VisitStatus::Missed => "missed".to_string(),
            VisitStatus::Other(s) => s,
        }
    }
}

/// One line of the technician's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// What was checked. Also accepted as `item`.
    #[serde(alias = "item")]
    pub label: String,
    /// Whether it passed. Also accepted as `ok`.
    #[serde(default, alias = "ok")]
    pub passed: bool,
}

/// A scheduled or completed maintenance visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceVisit {
    /// Backend identifier. Also accepted as `schedule_id`.
    #[serde(alias = "schedule_id", deserialize_with = "crate::de::id")]
    pub id: String,

    /// Site visited. Also accepted as `site`.
    #[serde(default, alias = "site")]
    pub site_name: String,

    /// Lift serviced. Also accepted as `elevator_id`.
    #[serde(default, alias = "elevator_id", deserialize_with = "crate::de::opt_id")]
    pub lift_id: Option<String>,

    /// Planned date. Also accepted as `visit_date`.
    #[serde(alias = "visit_date")]
    pub scheduled_on: NaiveDate,

    /// Actual date, once done.
    #[serde(default)]
    pub completed_on: Option<NaiveDate>,

    /// Technician assigned. Also accepted as `technician_name`.
    #[serde(default, alias = "technician_name")]
    pub technician: Option<String>,

    /// Visit status.
    #[serde(default)]
    pub status: VisitStatus,

    /// Technician remarks.
    #[serde(default)]
    pub remarks: Option<String>,

    /// Checklist results.
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl MaintenanceVisit {
    /// Check if the visit is still ahead of `today`.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == VisitStatus::Scheduled && self.scheduled_on >= today
    }

    /// Count of failed checklist items.
    pub fn failed_checks(&self) -> usize {
        self.checklist.iter().filter(|item| !item.passed).count()
    }
}

impl Searchable for MaintenanceVisit {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.site_name,
            self.lift_id.as_deref().unwrap_or_default(),
            self.technician.as_deref().unwrap_or_default(),
            self.status.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_visit_with_checklist() {
        let json = r#"{
            "schedule_id": "m-7",
            "site": "Palm Court",
            "visit_date": "2025-04-10",
            "status": "Done",
            "checklist": [
                {"item": "Door sensors", "ok": true},
                {"label": "Brake wear", "passed": false}
            ]
        }"#;
        let visit: MaintenanceVisit = serde_json::from_str(json).unwrap();
        assert_eq!(visit.id, "m-7");
        assert_eq!(visit.status, VisitStatus::Completed);
        assert_eq!(visit.checklist.len(), 2);
        assert_eq!(visit.failed_checks(), 1);
    }

    #[test]
    fn test_is_upcoming() {
        let visit: MaintenanceVisit =
            serde_json::from_str(r#"{"id": 1, "scheduled_on": "2025-05-01"}"#).unwrap();
        let before = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        assert!(visit.is_upcoming(before));
        assert!(!visit.is_upcoming(after));
    }
}
