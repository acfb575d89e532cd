//! The navigation context handed to screens.
//!
//! Holds the route mirror, the signed-in session and the payload slot, and
//! publishes a [`ContextEvent`] for every change so views can re-render.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lift_model::{Route, Session};
use tracing::{debug, info, warn};

use crate::error::NavError;
use crate::listeners::{ListenerList, Subscription};
use crate::payload::{Addressed, Payload};
use crate::router::Router;

/// A change in the navigation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextEvent {
    /// The router announced a route (a transition or an initialize pass).
    RouteChanged(Route),
    /// The session was set, replaced or cleared.
    SessionChanged,
    /// The payload slot changed. Carries the route the new payload is
    /// addressed to, or `None` when the slot was cleared.
    PayloadChanged(Option<Route>),
}

struct ContextState {
    route: Route,
    session: Option<Session>,
    payload: Option<Addressed>,
    revision: u64,
    listeners: ListenerList<ContextEvent>,
}

/// Cheap handle to the navigation state of one provider.
#[derive(Clone)]
pub struct NavigationContext {
    router: Router,
    shared: Arc<Mutex<ContextState>>,
}

impl NavigationContext {
    pub(crate) fn new(router: Router) -> Self {
        let state = ContextState {
            route: router.current_route(),
            session: None,
            payload: None,
            revision: 0,
            listeners: ListenerList::default(),
        };
        Self {
            router,
            shared: Arc::new(Mutex::new(state)),
        }
    }

    /// Register this context with its router so it mirrors route changes.
    pub(crate) fn attach(&self) -> Subscription {
        let shared = Arc::downgrade(&self.shared);
        self.router.subscribe(move |route| {
            if let Some(shared) = shared.upgrade() {
                route_observed(&shared, *route);
            }
        })
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// The route as last announced by the router.
    pub fn route(&self) -> Route {
        self.lock().route
    }

    pub fn session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().session.is_some()
    }

    /// Counter bumped on every change; views compare it to skip rebuilds.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    /// The router this context is bound to.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Get the payload addressed to `route`, if it is a `T`.
    pub fn payload_for<T: Any + Send + Sync>(&self, route: Route) -> Option<Arc<T>> {
        let state = self.lock();
        state
            .payload
            .as_ref()
            .filter(|slot| slot.route == route)
            .and_then(|slot| slot.payload.downcast::<T>())
    }

    /// Get the payload addressed to the current route, if it is a `T`.
    pub fn current_payload<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.payload_for(self.route())
    }

    /// The route the stored payload is addressed to.
    pub fn payload_route(&self) -> Option<Route> {
        self.lock().payload.as_ref().map(|slot| slot.route)
    }

    /// Register a listener for context events.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ContextEvent) + Send + Sync + 'static,
    {
        let id = self.lock().listeners.add(Arc::new(listener));
        let shared = Arc::downgrade(&self.shared);
        Subscription::new(id, move |id| {
            if let Some(shared) = shared.upgrade() {
                lock(&shared).listeners.remove(id);
            }
        })
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Navigate to a route given by path, optionally carrying data for it.
    ///
    /// Unknown paths are rejected before anything changes. Navigating
    /// without data clears any previous payload.
    pub fn navigate_to(&self, path: &str, data: Option<Payload>) -> Result<(), NavError> {
        let route = path.parse::<Route>().map_err(|source| {
            warn!(path, "navigation to unknown route rejected");
            NavError::InvalidRoute {
                path: path.to_string(),
                source,
            }
        })?;
        self.navigate_route(route, data);
        Ok(())
    }

    /// Navigate to `route`, optionally carrying data for it.
    pub fn navigate_route(&self, route: Route, data: Option<Payload>) {
        let changed = {
            let mut state = self.lock();
            let had_payload = state.payload.is_some();
            state.payload = data.map(|payload| Addressed { route, payload });
            let changed = had_payload || state.payload.is_some();
            if changed {
                state.revision += 1;
            }
            changed
        };
        if changed {
            debug!(%route, "navigation payload replaced");
            publish(&self.shared, &ContextEvent::PayloadChanged(self.payload_route()));
        }
        self.router.navigate(route);
    }

    /// Set or clear the signed-in user.
    pub fn set_user(&self, session: Option<Session>) {
        {
            let mut state = self.lock();
            match &session {
                Some(s) => debug!(user_id = %s.user_id, role = %s.role, "session set"),
                None => debug!("session cleared"),
            }
            state.session = session;
            state.revision += 1;
        }
        publish(&self.shared, &ContextEvent::SessionChanged);
    }

    /// Drop the stored payload.
    pub fn clear_navigation_data(&self) {
        let cleared = {
            let mut state = self.lock();
            let cleared = state.payload.take().is_some();
            if cleared {
                state.revision += 1;
            }
            cleared
        };
        if cleared {
            publish(&self.shared, &ContextEvent::PayloadChanged(None));
        }
    }

    /// Sign out: clear the session and payload, then go to the login screen.
    pub fn logout(&self) {
        info!("signing out");
        self.set_user(None);
        self.clear_navigation_data();
        self.router.navigate(Route::Login);
    }

    fn lock(&self) -> MutexGuard<'_, ContextState> {
        lock(&self.shared)
    }
}

fn lock(shared: &Mutex<ContextState>) -> MutexGuard<'_, ContextState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn route_observed(shared: &Mutex<ContextState>, route: Route) {
    {
        let mut state = lock(shared);
        state.route = route;
        state.revision += 1;
    }
    publish(shared, &ContextEvent::RouteChanged(route));
}

fn publish(shared: &Mutex<ContextState>, event: &ContextEvent) {
    let listeners = lock(shared).listeners.snapshot();
    for (id, listener) in listeners {
        if lock(shared).listeners.contains(id) {
            listener(event);
        }
    }
}

impl fmt::Debug for NavigationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("NavigationContext")
            .field("route", &state.route)
            .field("session", &state.session.as_ref().map(|s| &s.user_id))
            .field("payload", &state.payload)
            .field("revision", &state.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lift_model::Role;

    fn attached() -> (NavigationContext, Subscription) {
        let ctx = NavigationContext::new(Router::new());
        let sub = ctx.attach();
        (ctx, sub)
    }

    #[test]
    fn test_route_mirror_follows_router() {
        let (ctx, _sub) = attached();
        ctx.router().navigate(Route::Register);
        assert_eq!(ctx.route(), Route::Register);
    }

    #[test]
    fn test_invalid_path_changes_nothing() {
        let (ctx, _sub) = attached();
        ctx.navigate_route(Route::Otp, Some(Payload::new("a@b.in".to_string())));
        let before = ctx.revision();

        let err = ctx.navigate_to("/nowhere", None).unwrap_err();
        assert_eq!(err.path(), Some("/nowhere"));
        assert_eq!(ctx.route(), Route::Otp);
        assert_eq!(ctx.revision(), before);
        assert!(ctx.payload_for::<String>(Route::Otp).is_some());
    }

    #[test]
    fn test_payload_is_route_addressed() {
        let (ctx, _sub) = attached();
        ctx.navigate_to("ticket-details", Some(Payload::new(42_u32)))
            .unwrap();
        assert_eq!(ctx.current_payload::<u32>().as_deref(), Some(&42));
        assert!(ctx.payload_for::<u32>(Route::Dashboard).is_none());
        assert!(ctx.payload_for::<String>(Route::TicketDetails).is_none());

        ctx.navigate_to("dashboard", None).unwrap();
        assert_eq!(ctx.payload_route(), None);
    }

    #[test]
    fn test_logout_resets_everything() {
        let (ctx, _sub) = attached();
        ctx.set_user(Some(Session::new("1", "Owner", Role::Customer)));
        ctx.navigate_route(Route::TicketDetails, Some(Payload::new(1_u8)));
        assert!(ctx.is_authenticated());

        ctx.logout();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.payload_route(), None);
        assert_eq!(ctx.route(), Route::Login);
    }
}
