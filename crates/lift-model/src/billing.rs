//! Invoices and quotations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize_label;
use crate::search::Searchable;

// =============================================================================
// INVOICE
// =============================================================================

/// A bill raised against the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Backend identifier. Also accepted as `invoice_id`.
    #[serde(alias = "invoice_id", deserialize_with = "crate::de::id")]
    pub id: String,

    /// Printed invoice number. Also accepted as `invoice_no`.
    #[serde(default, alias = "invoice_no")]
    pub invoice_number: String,

    /// Issue date. Also accepted as `invoice_date`.
    #[serde(alias = "invoice_date")]
    pub issued_on: NaiveDate,

    /// Payment due date.
    #[serde(default)]
    pub due_on: Option<NaiveDate>,

    /// Total amount. Also accepted as `total`.
    #[serde(default, alias = "total", deserialize_with = "crate::de::amount")]
    pub amount: f64,

    /// Whether it has been paid. Also accepted as `is_paid`.
    #[serde(default, alias = "is_paid")]
    pub paid: bool,

    /// What the invoice is for.
    #[serde(default)]
    pub description: String,
}

impl Invoice {
    /// Check if payment is late on `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.paid && self.due_on.is_some_and(|due| due < today)
    }
}

impl Searchable for Invoice {
    fn search_text(&self) -> String {
        format!("{} {}", self.invoice_number, self.description)
    }
}

// =============================================================================
// QUOTATION
// =============================================================================

/// Quotation status.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuotationStatus {
    /// Awaiting customer decision.
    #[default]
    Pending,
    /// Accepted by the customer.
    Accepted,
    /// Declined or lapsed.
    Rejected,
    /// Unrecognized status string.
    Other(String),
}

impl QuotationStatus {
    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for QuotationStatus {
    fn from(s: String) -> Self {
        match normalize_label(&s).as_str() {
            "pending" | "sent" | "" => Self::Pending,
            "accepted" | "approved" => Self::Accepted,
            "rejected" | "declined" | "expired" => Self::Rejected,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl From<QuotationStatus> for String {
    fn from(status: QuotationStatus) -> Self {
        match status {
            QuotationStatus::Pending => "pending".to_string(),
            QuotationStatus::Accepted => "accepted".to_string(),
            QuotationStatus::Rejected => "rejected".to_string(),
            QuotationStatus::Other(s) => s,
        }
    }
}

/// A price offer for repairs, upgrades or contract renewal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// Backend identifier. Also accepted as `quotation_id`.
    #[serde(alias = "quotation_id", deserialize_with = "crate::de::id")]
    pub id: String,

    /// Printed quotation number. Also accepted as `quotation_no`.
    #[serde(default, alias = "quotation_no")]
    pub quotation_number: String,

    /// Issue date. Also accepted as `quotation_date`.
    #[serde(alias = "quotation_date")]
    pub issued_on: NaiveDate,

    /// Last day the offer is valid.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,

    /// Quoted amount. Also accepted as `total`.
    #[serde(default, alias = "total", deserialize_with = "crate::de::amount")]
    pub amount: f64,

    /// What is being quoted.
    #[serde(default)]
    pub description: String,

    /// Decision status.
    #[serde(default)]
    pub status: QuotationStatus,
}

impl Searchable for Quotation {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.quotation_number,
            self.description,
            self.status.label()
        )
    }
}

/// Sum of the amounts, for list footers.
pub fn total<'a>(amounts: impl IntoIterator<Item = &'a f64>) -> f64 {
    amounts.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_invoice_aliases() {
        let json = r#"{
            "invoice_id": 55,
            "invoice_no": "INV-55",
            "invoice_date": "2025-02-01",
            "due_on": "2025-02-15",
            "total": "12,000.00",
            "is_paid": false
        }"#;
        let inv: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(inv.invoice_number, "INV-55");
        assert_eq!(inv.amount, 12000.0);
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(inv.is_overdue(today));
    }

    #[test]
    fn test_paid_invoice_is_never_overdue() {
        let inv: Invoice = serde_json::from_str(
            r#"{"id": 1, "issued_on": "2025-01-01", "due_on": "2025-01-10", "paid": true}"#,
        )
        .unwrap();
        assert!(!inv.is_overdue(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
    }

    #[test]
    fn test_quotation_status() {
        let q: Quotation = serde_json::from_str(
            r#"{"quotation_id": "q9", "quotation_date": "2025-01-05", "status": "Approved", "amount": 1500}"#,
        )
        .unwrap();
        assert_eq!(q.status, QuotationStatus::Accepted);
        assert_eq!(q.amount, 1500.0);
    }

    #[test]
    fn test_total() {
        assert_eq!(total(&[100.0, 250.5]), 350.5);
        assert_eq!(total(&[]), 0.0);
    }
}
