//! New-complaint form messages.

use lift_api::ApiError;
use lift_model::{Complaint, Priority};

use crate::state::ComplaintField;

#[derive(Debug, Clone)]
pub enum ComplaintMessage {
    FieldChanged(ComplaintField, String),
    PriorityChanged(Priority),
    Submit,
    /// Tagged with the session epoch of the request.
    Created(u64, Result<Complaint, ApiError>),
}
