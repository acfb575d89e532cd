//! Messages for fetched lists.

use lift_api::ApiError;
use lift_model::{
    AmcContract, Complaint, ComplaintStatus, CustomerProfile, Invoice, MaintenanceVisit, Quotation,
};

use crate::state::Resource;

#[derive(Debug, Clone)]
pub enum DataMessage {
    /// Fetch (or refetch) a list for the signed-in customer.
    Load(Resource),

    // Fetch results, tagged with the session epoch of the request.
    ComplaintsLoaded(u64, Result<Vec<Complaint>, ApiError>),
    ContractsLoaded(u64, Result<Vec<AmcContract>, ApiError>),
    MaintenanceLoaded(u64, Result<Vec<MaintenanceVisit>, ApiError>),
    InvoicesLoaded(u64, Result<Vec<Invoice>, ApiError>),
    QuotationsLoaded(u64, Result<Vec<Quotation>, ApiError>),
    ProfilesLoaded(u64, Result<Vec<CustomerProfile>, ApiError>),

    SearchChanged(Resource, String),
    SearchCleared(Resource),
    /// `None` shows every status.
    StatusFilterChanged(Option<ComplaintStatus>),
    ShowClosedToggled(bool),
    ShowMore(Resource),
}
