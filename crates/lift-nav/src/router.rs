//! The router: single source of truth for the current route.
//!
//! A `Router` is a cheap handle; clones share one state. Subscribers are
//! notified synchronously, in registration order, whenever the route changes.
//! A subscriber that navigates while being notified does not recurse: the
//! request is queued and handled after the running pass, before the outermost
//! call returns.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lift_model::Route;
use tracing::{debug, trace, warn};

use crate::listeners::{ListenerList, Subscription};

/// Maximum number of requests handled by one outermost `navigate` or
/// `initialize` call, counting the call itself.
pub const MAX_CASCADE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Navigate(Route),
    Refresh,
}

#[derive(Default)]
struct RouterState {
    current: Route,
    listeners: ListenerList<Route>,
    notifying: bool,
    queue: VecDeque<Request>,
}

/// Shared handle to the navigation state.
#[derive(Clone, Default)]
pub struct Router {
    shared: Arc<Mutex<RouterState>>,
}

impl Router {
    /// Create a router at the default route (`Login`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router at `route`.
    pub fn starting_at(route: Route) -> Self {
        Self {
            shared: Arc::new(Mutex::new(RouterState {
                current: route,
                ..RouterState::default()
            })),
        }
    }

    pub fn current_route(&self) -> Route {
        self.lock().current
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Check if two handles share the same state.
    pub fn same_router(&self, other: &Router) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Register a listener for route changes.
    ///
    /// The listener stays registered until the returned guard is dropped or
    /// [`Subscription::unsubscribe`] is called.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Route) + Send + Sync + 'static,
    {
        let id = self.lock().listeners.add(Arc::new(listener));
        let shared = Arc::downgrade(&self.shared);
        trace!(?id, "router listener added");
        Subscription::new(id, move |id| {
            if let Some(shared) = shared.upgrade() {
                let removed = shared
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .listeners
                    .remove(id);
                trace!(?id, removed, "router listener removed");
            }
        })
    }

    /// Move to `route` and notify listeners. Navigating to the current route
    /// does nothing.
    pub fn navigate(&self, route: Route) {
        self.submit(Request::Navigate(route));
    }

    /// Notify every listener of the current route without changing it.
    pub fn initialize(&self) {
        self.submit(Request::Refresh);
    }

    // =========================================================================
    // NOTIFICATION
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, RouterState> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn submit(&self, request: Request) {
        let mut state = self.lock();
        if state.notifying {
            if state.queue.len() + 1 >= MAX_CASCADE {
                warn!(?request, "navigation cascade limit reached, request dropped");
            } else {
                trace!(?request, "navigation queued behind running pass");
                state.queue.push_back(request);
            }
            return;
        }
        state.notifying = true;
        drop(state);

        let _pass = PassGuard { router: self };
        let mut next = Some(request);
        let mut handled = 0;
        while let Some(request) = next {
            if let Some(route) = self.apply(request) {
                self.notify(route);
            }
            handled += 1;

            let mut state = self.lock();
            next = if handled < MAX_CASCADE {
                state.queue.pop_front()
            } else {
                if !state.queue.is_empty() {
                    warn!(
                        dropped = state.queue.len(),
                        "navigation cascade limit reached, pending requests dropped"
                    );
                    state.queue.clear();
                }
                None
            };
        }
    }

    /// Update the state for one request and return the route to announce.
    fn apply(&self, request: Request) -> Option<Route> {
        let mut state = self.lock();
        match request {
            Request::Navigate(route) if route == state.current => {
                trace!(%route, "already on route");
                None
            }
            Request::Navigate(route) => {
                let from = std::mem::replace(&mut state.current, route);
                debug!(%from, to = %route, "route changed");
                Some(route)
            }
            Request::Refresh => {
                debug!(route = %state.current, "router initialized");
                Some(state.current)
            }
        }
    }

    fn notify(&self, route: Route) {
        let listeners = self.lock().listeners.snapshot();
        for (id, listener) in listeners {
            // Skip listeners removed by an earlier listener in this pass.
            if self.lock().listeners.contains(id) {
                listener(&route);
            }
        }
    }
}

/// Ends a notification pass, including when a listener panics.
struct PassGuard<'a> {
    router: &'a Router,
}

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.router.lock();
        state.notifying = false;
        state.queue.clear();
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Router")
            .field("current", &state.current)
            .field("listeners", &state.listeners.len())
            .field("notifying", &state.notifying)
            .finish()
    }
}
