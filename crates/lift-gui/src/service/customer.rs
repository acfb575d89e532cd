//! Customer data calls.

use lift_api::{ApiClient, ApiError};
use lift_model::{
    AmcContract, Complaint, ComplaintDraft, CustomerProfile, Invoice, MaintenanceVisit, NewUser,
    Quotation,
};

pub async fn complaints(api: ApiClient, customer_id: String) -> Result<Vec<Complaint>, ApiError> {
    api.complaints(&customer_id).await
}

pub async fn contracts(api: ApiClient, customer_id: String) -> Result<Vec<AmcContract>, ApiError> {
    api.amc_contracts(&customer_id).await
}

/// Visits ordered by scheduled date.
pub async fn maintenance(
    api: ApiClient,
    customer_id: String,
) -> Result<Vec<MaintenanceVisit>, ApiError> {
    let mut visits = api.maintenance_schedule(&customer_id).await?;
    visits.sort_by_key(|v| v.scheduled_on);
    Ok(visits)
}

pub async fn invoices(api: ApiClient, customer_id: String) -> Result<Vec<Invoice>, ApiError> {
    api.invoices(&customer_id).await
}

pub async fn quotations(api: ApiClient, customer_id: String) -> Result<Vec<Quotation>, ApiError> {
    api.quotations(&customer_id).await
}

pub async fn profiles(
    api: ApiClient,
    customer_id: String,
) -> Result<Vec<CustomerProfile>, ApiError> {
    api.sub_customers(&customer_id).await
}

pub async fn create_complaint(api: ApiClient, draft: ComplaintDraft) -> Result<Complaint, ApiError> {
    api.create_complaint(&draft).await
}

pub async fn create_user(
    api: ApiClient,
    customer_id: String,
    form: NewUser,
) -> Result<CustomerProfile, ApiError> {
    api.create_user(&customer_id, &form).await
}
