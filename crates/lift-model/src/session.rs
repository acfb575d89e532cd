//! The logged-in identity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::normalize_label;

// =============================================================================
// ROLE
// =============================================================================

/// Account role returned by the login endpoint.
///
/// Decoded from a free-form string; see [`Role::parse`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Primary customer account.
    #[default]
    Customer,
    /// Restricted account created under a customer.
    SubCustomer,
    /// Company staff account.
    Admin,
    /// Any role string this client does not know.
    Other(String),
}

impl Role {
    /// Parse a role string, ignoring case and separators.
    pub fn parse(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "customer" | "" => Self::Customer,
            "subcustomer" | "subuser" | "child" => Self::SubCustomer,
            "admin" | "administrator" => Self::Admin,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// Get the canonical role string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Customer => "customer",
            Self::SubCustomer => "sub-customer",
            Self::Admin => "admin",
            Self::Other(s) => s,
        }
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Customer => "Customer",
            Self::SubCustomer => "Sub-Customer",
            Self::Admin => "Administrator",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Logged-in identity.
///
/// Set on login, replaced on profile switch, cleared on logout. Fields the
/// backend sends beyond the declared ones are kept in [`Session::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// User identifier. Also accepted as `id` or `userId`.
    #[serde(alias = "id", alias = "userId", deserialize_with = "crate::de::id")]
    pub user_id: String,

    /// Display name. Also accepted as `username` or `fullName`.
    #[serde(
        default,
        alias = "username",
        alias = "fullName",
        deserialize_with = "crate::de::or_default"
    )]
    pub name: String,

    /// Email address.
    #[serde(default, deserialize_with = "crate::de::or_default")]
    pub email: String,

    /// Account role. Also accepted as `userType` or `user_type`.
    #[serde(
        default,
        alias = "userType",
        alias = "user_type",
        deserialize_with = "crate::de::or_default"
    )]
    pub role: Role,

    /// Customer account this user acts for. Also accepted as `customerId`.
    #[serde(
        default,
        alias = "customerId",
        deserialize_with = "crate::de::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_id: Option<String>,

    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company name. Also accepted as `companyName`.
    #[serde(default, alias = "companyName", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Undeclared fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// Create a session with only the identity fields set.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: String::new(),
            role,
            customer_id: None,
            phone: None,
            company: None,
            extra: Map::new(),
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the customer account.
    pub fn with_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Get the customer account whose data this session reads.
    ///
    /// Primary customers act for themselves, so this falls back to the user id.
    pub fn customer_id(&self) -> &str {
        self.customer_id.as_deref().unwrap_or(&self.user_id)
    }

    /// Get the name to greet the user with.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            &self.name
        } else if !self.email.is_empty() {
            &self.email
        } else {
            &self.user_id
        }
    }

    /// Check if this is a restricted sub-customer account.
    pub fn is_sub_customer(&self) -> bool {
        self.role == Role::SubCustomer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_variants() {
        assert_eq!(Role::parse("sub-customer"), Role::SubCustomer);
        assert_eq!(Role::parse("SubCustomer"), Role::SubCustomer);
        assert_eq!(Role::parse("sub_customer"), Role::SubCustomer);
        assert_eq!(Role::parse("Customer"), Role::Customer);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("technician"), Role::Other("technician".into()));
    }

    #[test]
    fn test_session_decodes_aliases() {
        let json = r#"{
            "id": 17,
            "fullName": "Asha Rao",
            "email": "asha@tower.example",
            "userType": "sub-customer",
            "customerId": 4,
            "branch": "Andheri"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user_id, "17");
        assert_eq!(session.name, "Asha Rao");
        assert_eq!(session.role, Role::SubCustomer);
        assert_eq!(session.customer_id(), "4");
        assert_eq!(session.extra.get("branch"), Some(&Value::from("Andheri")));
    }

    #[test]
    fn test_session_minimal() {
        let session: Session = serde_json::from_str(r#"{"user_id": "u1"}"#).unwrap();
        assert_eq!(session.role, Role::Customer);
        assert_eq!(session.customer_id(), "u1");
        assert_eq!(session.display_name(), "u1");
    }

    #[test]
    fn test_session_null_fields_use_defaults() {
        let session: Session =
            serde_json::from_str(r#"{"id": 5, "name": null, "email": null, "role": null}"#)
                .unwrap();
        assert_eq!(session.user_id, "5");
        assert_eq!(session.name, "");
        assert_eq!(session.email, "");
        assert_eq!(session.role, Role::Customer);

        let session: Session = serde_json::from_str(r#"{"id": 5, "name": "A", "role": null}"#).unwrap();
        assert_eq!(session.name, "A");
        assert_eq!(session.role, Role::Customer);
    }

    #[test]
    fn test_session_requires_identifier() {
        assert!(serde_json::from_str::<Session>(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_display_name_prefers_name_then_email() {
        let session = Session::new("u1", "  ", Role::Customer).with_email("a@b.co");
        assert_eq!(session.display_name(), "a@b.co");
    }
}
