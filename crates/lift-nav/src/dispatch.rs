//! Route-to-screen dispatch.

use std::collections::BTreeMap;

use lift_model::{Route, Session};
use tracing::debug;

/// The screens the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Screen {
    Login,
    Register,
    Otp,
    Dashboard,
    Complaints,
    AddComplaint,
    TicketDetails,
    RoutineMaintenance,
    MaintenanceDetails,
    AmcContracts,
    Invoices,
    Quotations,
    AboutUs,
    CreateUser,
    ProfileSwitch,
}

impl Screen {
    /// The screen registered for `route` in the standard table.
    pub const fn for_route(route: Route) -> Self {
        match route {
            Route::Login => Self::Login,
            Route::Register => Self::Register,
            Route::Otp => Self::Otp,
            Route::Dashboard => Self::Dashboard,
            Route::Complaints => Self::Complaints,
            Route::AddComplaint => Self::AddComplaint,
            Route::TicketDetails => Self::TicketDetails,
            Route::RoutineMaintenance => Self::RoutineMaintenance,
            Route::MaintenanceDetails => Self::MaintenanceDetails,
            Route::AmcContracts => Self::AmcContracts,
            Route::Invoice => Self::Invoices,
            Route::Quotation => Self::Quotations,
            Route::AboutUs => Self::AboutUs,
            Route::CreateUser => Self::CreateUser,
            Route::ProfileSwitch => Self::ProfileSwitch,
        }
    }
}

/// Mapping from route to screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenTable {
    entries: BTreeMap<Route, Screen>,
}

impl ScreenTable {
    /// Every route mapped to its own screen.
    pub fn standard() -> Self {
        Self {
            entries: Route::ALL
                .iter()
                .map(|&route| (route, Screen::for_route(route)))
                .collect(),
        }
    }

    /// An empty table.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Remove the entry for `route`.
    pub fn without(mut self, route: Route) -> Self {
        self.entries.remove(&route);
        self
    }

    /// Map `route` to `screen`.
    pub fn with(mut self, route: Route, screen: Screen) -> Self {
        self.entries.insert(route, screen);
        self
    }

    pub fn get(&self, route: Route) -> Option<Screen> {
        self.entries.get(&route).copied()
    }

    /// Check if every route has a screen.
    pub fn is_total(&self) -> bool {
        Route::ALL.iter().all(|route| self.entries.contains_key(route))
    }
}

impl Default for ScreenTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chooses the screen to render for a route and session.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    table: ScreenTable,
}

impl Dispatcher {
    pub fn new(table: ScreenTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ScreenTable {
        &self.table
    }

    /// Select the screen for `route`.
    ///
    /// Unmapped routes fall back to the dashboard when signed in and to the
    /// login screen otherwise. Sub-customers cannot create users and get the
    /// dashboard instead.
    pub fn select(&self, route: Route, session: Option<&Session>) -> Screen {
        let screen = match self.table.get(route) {
            Some(screen) => screen,
            None => {
                let fallback = Self::fallback(session);
                debug!(%route, ?fallback, "no screen registered for route");
                fallback
            }
        };

        if screen == Screen::CreateUser && session.is_some_and(Session::is_sub_customer) {
            debug!(%route, "create-user is not available to sub-customers");
            return Screen::Dashboard;
        }
        screen
    }

    /// Select the screen for a path, falling back for unknown paths.
    pub fn select_path(&self, path: &str, session: Option<&Session>) -> Screen {
        match path.parse::<Route>() {
            Ok(route) => self.select(route, session),
            Err(err) => {
                let fallback = Self::fallback(session);
                debug!(%err, ?fallback, "unparsable path dispatched to fallback");
                fallback
            }
        }
    }

    fn fallback(session: Option<&Session>) -> Screen {
        if session.is_some() {
            Screen::Dashboard
        } else {
            Screen::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lift_model::Role;

    #[test]
    fn test_standard_table_is_total() {
        let table = ScreenTable::standard();
        assert!(table.is_total());
        assert!(!table.clone().without(Route::AboutUs).is_total());
        assert_eq!(table.get(Route::Invoice), Some(Screen::Invoices));
    }

    #[test]
    fn test_fallback_depends_on_session() {
        let dispatcher = Dispatcher::new(ScreenTable::standard().without(Route::AboutUs));
        let owner = Session::new("1", "Owner", Role::Customer);
        assert_eq!(dispatcher.select(Route::AboutUs, None), Screen::Login);
        assert_eq!(
            dispatcher.select(Route::AboutUs, Some(&owner)),
            Screen::Dashboard
        );
        assert_eq!(dispatcher.select_path("/bogus", None), Screen::Login);
    }

    #[test]
    fn test_customers_may_create_users() {
        let dispatcher = Dispatcher::default();
        let owner = Session::new("1", "Owner", Role::Customer);
        assert_eq!(
            dispatcher.select(Route::CreateUser, Some(&owner)),
            Screen::CreateUser
        );
        assert_eq!(dispatcher.select(Route::CreateUser, None), Screen::CreateUser);
    }
}
