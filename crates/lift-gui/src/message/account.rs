//! Profile switching and sub-customer creation.

use lift_api::ApiError;
use lift_model::CustomerProfile;

use crate::state::NewUserField;

#[derive(Debug, Clone)]
pub enum AccountMessage {
    /// Act as another profile of the signed-in customer.
    SwitchProfile(CustomerProfile),
    NewUserChanged(NewUserField, String),
    SubmitNewUser,
    /// Tagged with the session epoch of the request.
    UserCreated(u64, Result<CustomerProfile, ApiError>),
}
