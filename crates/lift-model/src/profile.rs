//! Customer profiles, sub-customer creation and self-registration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, require, validate_email, validate_phone};
use crate::search::Searchable;
use crate::session::{Role, Session};

// =============================================================================
// CUSTOMER PROFILE
// =============================================================================

/// A profile the current user may switch to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    /// Backend identifier. Also accepted as `user_id`.
    #[serde(alias = "user_id", deserialize_with = "crate::de::id")]
    pub id: String,

    /// Display name. Also accepted as `customer_name`.
    #[serde(default, alias = "customer_name", deserialize_with = "crate::de::or_default")]
    pub name: String,

    /// Email address.
    #[serde(default, deserialize_with = "crate::de::or_default")]
    pub email: String,

    /// Account role. Also accepted as `user_type`.
    #[serde(default, alias = "user_type", deserialize_with = "crate::de::or_default")]
    pub role: Role,

    /// Site this profile manages. Also accepted as `site`.
    #[serde(default, alias = "site")]
    pub site_name: Option<String>,

    /// Customer account the profile belongs to. Also accepted as `parent_id`.
    #[serde(default, alias = "parent_id", deserialize_with = "crate::de::opt_id")]
    pub customer_id: Option<String>,
}

impl CustomerProfile {
    /// Build the session that acting as this profile produces.
    ///
    /// Contact fields the profile does not carry are kept from `current`.
    pub fn to_session(&self, current: &Session) -> Session {
        Session {
            user_id: self.id.clone(),
            name: self.name.clone(),
            email: if self.email.is_empty() {
                current.email.clone()
            } else {
                self.email.clone()
            },
            role: self.role.clone(),
            customer_id: Some(
                self.customer_id
                    .clone()
                    .unwrap_or_else(|| self.id.clone()),
            ),
            phone: current.phone.clone(),
            company: current.company.clone(),
            extra: current.extra.clone(),
        }
    }
}

impl Searchable for CustomerProfile {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.email,
            self.site_name.as_deref().unwrap_or_default()
        )
    }
}

// =============================================================================
// FORMS
// =============================================================================

/// Form for creating a sub-customer account.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    /// Full name.
    pub name: String,
    /// Email address (used for OTP login).
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Site the new user manages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl NewUser {
    /// Check the form before submitting it.
    pub fn validate(&self) -> Result<()> {
        require("Name", &self.name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;
        Ok(())
    }
}

/// Self-registration form.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// Full name.
    pub name: String,
    /// Email address (used for OTP login).
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Company or society name.
    pub company: String,
}

impl Registration {
    /// Check the form before submitting it.
    pub fn validate(&self) -> Result<()> {
        require("Name", &self.name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;
        require("Company", &self.company)?;
        Ok(())
    }
}
