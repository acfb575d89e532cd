//! Annual maintenance contracts (AMC).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize_label;
use crate::search::Searchable;

/// Contract status as reported by the backend.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContractStatus {
    /// In force.
    #[default]
    Active,
    /// Past its end date.
    Expired,
    /// Renewal quoted but not yet signed.
    PendingRenewal,
    /// Unrecognized status string.
    Other(String),
}

impl ContractStatus {
    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::PendingRenewal => "Pending Renewal",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ContractStatus {
    fn from(s: String) -> Self {
        match normalize_label(&s).as_str() {
            "active" | "live" | "" => Self::Active,
            "expired" | "inactive" => Self::Expired,
            "pendingrenewal" | "renewal" | "pending" => Self::PendingRenewal,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl From<ContractStatus> for String {
    fn from(status: ContractStatus) -> Self {
        match status {
            ContractStatus::Active => "active".to_string(),
            ContractStatus::Expired => "expired".to_string(),
            ContractStatus::PendingRenewal => "pending_renewal".to_string(),
            ContractStatus::Other(s) => s,
        }
    }
}

/// An annual maintenance contract covering one or more lifts at a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmcContract {
    /// Backend identifier. Also accepted as `amc_id`.
    #[serde(alias = "amc_id", deserialize_with = "crate::de::id")]
    pub id: String,

    /// Contract number printed on paperwork. Also accepted as `amc_number`.
    #[serde(default, alias = "amc_number")]
    pub contract_number: String,

    /// Site covered by the contract. Also accepted as `site`.
    #[serde(default, alias = "site")]
    pub site_name: String,

    /// Number of lifts covered. Also accepted as `no_of_lifts`.
    #[serde(default, alias = "no_of_lifts", deserialize_with = "crate::de::count")]
    pub lift_count: u32,

    /// First day of coverage.
    pub start_date: NaiveDate,

    /// Last day of coverage.
    pub end_date: NaiveDate,

    /// Reported status.
    #[serde(default)]
    pub status: ContractStatus,

    /// Contract value. Also accepted as `contract_value`.
    #[serde(default, alias = "contract_value", deserialize_with = "crate::de::amount")]
    pub amount: f64,
}

impl AmcContract {
    /// Check whether `date` falls inside the coverage period.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.status != ContractStatus::Expired && self.start_date <= date && date <= self.end_date
    }

    /// Days of coverage left after `date` (zero once expired).
    pub fn days_remaining(&self, date: NaiveDate) -> i64 {
        (self.end_date - date).num_days().max(0)
    }
}

impl Searchable for AmcContract {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.contract_number,
            self.site_name,
            self.status.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> AmcContract {
        serde_json::from_str(
            r#"{
                "amc_id": 11,
                "amc_number": "AMC/2025/011",
                "site": "Lake Residency",
                "no_of_lifts": "3",
                "start_date": "2025-01-01",
                "end_date": "2025-12-31",
                "status": "Active",
                "contract_value": "84,000"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_contract() {
        let c = contract();
        assert_eq!(c.id, "11");
        assert_eq!(c.lift_count, 3);
        assert_eq!(c.amount, 84000.0);
        assert_eq!(c.status, ContractStatus::Active);
    }

    #[test]
    fn test_active_window() {
        let c = contract();
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        assert!(c.is_active_on(d("2025-01-01")));
        assert!(c.is_active_on(d("2025-12-31")));
        assert!(!c.is_active_on(d("2026-01-01")));
        assert_eq!(c.days_remaining(d("2025-12-01")), 30);
        assert_eq!(c.days_remaining(d("2026-02-01")), 0);
    }

    #[test]
    fn test_expired_status_overrides_dates() {
        let mut c = contract();
        c.status = ContractStatus::Expired;
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(!c.is_active_on(d));
    }
}
