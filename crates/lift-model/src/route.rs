//! Navigation routes.
//!
//! A [`Route`] names one screen of the application. The set is closed: every
//! screen the portal can show is listed here, and path strings are validated
//! against this list at the boundary instead of being carried around raw.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ROUTE ENUM
// =============================================================================

/// Screen identifier.
///
/// The first member, [`Route::Login`], is the starting route of a freshly
/// constructed router.
///
/// # Example
///
/// ```
/// use lift_model::Route;
///
/// let route: Route = "/ticket-details".parse().unwrap();
/// assert_eq!(route, Route::TicketDetails);
/// assert_eq!(route.path(), "/ticket-details");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Email entry, first step of OTP login.
    #[default]
    Login,
    /// New customer registration form.
    Register,
    /// Landing screen after login.
    Dashboard,
    /// File a new complaint.
    AddComplaint,
    /// Complaint/ticket list.
    Complaints,
    /// Single ticket, reached from the complaint list.
    TicketDetails,
    /// Routine maintenance schedule.
    RoutineMaintenance,
    /// Single maintenance visit.
    MaintenanceDetails,
    /// Annual maintenance contracts.
    AmcContracts,
    /// Invoices.
    Invoice,
    /// Quotations.
    Quotation,
    /// Company information.
    AboutUs,
    /// Create a sub-customer account.
    CreateUser,
    /// Switch between sub-customer profiles.
    ProfileSwitch,
    /// One-time password entry, second step of login.
    Otp,
}

impl Route {
    /// Every route, in declaration order.
    pub const ALL: [Route; 15] = [
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::AddComplaint,
        Self::Complaints,
        Self::TicketDetails,
        Self::RoutineMaintenance,
        Self::MaintenanceDetails,
        Self::AmcContracts,
        Self::Invoice,
        Self::Quotation,
        Self::AboutUs,
        Self::CreateUser,
        Self::ProfileSwitch,
        Self::Otp,
    ];

    /// Routes shown in the sidebar menu of a logged-in session.
    pub const MENU: [Route; 10] = [
        Self::Dashboard,
        Self::Complaints,
        Self::AddComplaint,
        Self::RoutineMaintenance,
        Self::AmcContracts,
        Self::Invoice,
        Self::Quotation,
        Self::ProfileSwitch,
        Self::CreateUser,
        Self::AboutUs,
    ];

    /// Get the route name without a leading slash (e.g. `"add-complaint"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::AddComplaint => "add-complaint",
            Self::Complaints => "complaints",
            Self::TicketDetails => "ticket-details",
            Self::RoutineMaintenance => "routine-maintenance",
            Self::MaintenanceDetails => "maintenance-details",
            Self::AmcContracts => "amc-contracts",
            Self::Invoice => "invoice",
            Self::Quotation => "quotation",
            Self::AboutUs => "about-us",
            Self::CreateUser => "create-user",
            Self::ProfileSwitch => "profile-switch",
            Self::Otp => "otp",
        }
    }

    /// Get the path form of the route (e.g. `"/add-complaint"`).
    pub fn path(&self) -> String {
        format!("/{}", self.as_str())
    }

    /// Get the screen title shown in headers and the sidebar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Dashboard => "Dashboard",
            Self::AddComplaint => "New Complaint",
            Self::Complaints => "Complaints",
            Self::TicketDetails => "Ticket Details",
            Self::RoutineMaintenance => "Routine Maintenance",
            Self::MaintenanceDetails => "Maintenance Details",
            Self::AmcContracts => "AMC Contracts",
            Self::Invoice => "Invoices",
            Self::Quotation => "Quotations",
            Self::AboutUs => "About Us",
            Self::CreateUser => "Create User",
            Self::ProfileSwitch => "Switch Profile",
            Self::Otp => "Verify OTP",
        }
    }

    /// Check if the route belongs to the login flow (reachable without a session).
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Register | Self::Otp)
    }

    /// Get the route a back button on this screen returns to.
    pub fn parent(&self) -> Route {
        match self {
            Self::Register | Self::Otp | Self::Login => Self::Login,
            Self::TicketDetails | Self::AddComplaint => Self::Complaints,
            Self::MaintenanceDetails => Self::RoutineMaintenance,
            _ => Self::Dashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// A path string that does not name any [`Route`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown route: '{input}'")]
pub struct RouteParseError {
    /// The rejected input, as given.
    pub input: String,
}

impl FromStr for Route {
    type Err = RouteParseError;

    /// Parse a route name or path.
    ///
    /// One leading `/` is stripped; the remainder must match a route name
    /// exactly (no case folding, no trailing slash).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix('/').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|route| route.as_str() == name)
            .ok_or_else(|| RouteParseError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_slash() {
        assert_eq!("dashboard".parse::<Route>().unwrap(), Route::Dashboard);
        assert_eq!("/dashboard".parse::<Route>().unwrap(), Route::Dashboard);
        assert_eq!(
            "/routine-maintenance".parse::<Route>().unwrap(),
            Route::RoutineMaintenance
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "/settings".parse::<Route>().unwrap_err();
        assert_eq!(err.input, "/settings");
        assert_eq!(err.to_string(), "unknown route: '/settings'");
    }

    #[test]
    fn test_parse_is_strict() {
        assert!("//dashboard".parse::<Route>().is_err());
        assert!("Dashboard".parse::<Route>().is_err());
        assert!("dashboard/".parse::<Route>().is_err());
        assert!("".parse::<Route>().is_err());
        assert!("/".parse::<Route>().is_err());
    }

    #[test]
    fn test_every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
            assert_eq!(route.as_str().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn test_default_is_first_member() {
        assert_eq!(Route::default(), Route::ALL[0]);
        assert_eq!(Route::default(), Route::Login);
    }

    #[test]
    fn test_serde_uses_route_names() {
        let json = serde_json::to_string(&Route::AmcContracts).unwrap();
        assert_eq!(json, "\"amc-contracts\"");
        let route: Route = serde_json::from_str("\"profile-switch\"").unwrap();
        assert_eq!(route, Route::ProfileSwitch);
    }

    #[test]
    fn test_parent_routes() {
        assert_eq!(Route::TicketDetails.parent(), Route::Complaints);
        assert_eq!(Route::MaintenanceDetails.parent(), Route::RoutineMaintenance);
        assert_eq!(Route::Otp.parent(), Route::Login);
        assert_eq!(Route::Invoice.parent(), Route::Dashboard);
    }

    #[test]
    fn test_menu_excludes_login_flow() {
        assert!(Route::MENU.iter().all(|r| !r.is_public()));
        assert!(!Route::MENU.contains(&Route::TicketDetails));
    }
}
