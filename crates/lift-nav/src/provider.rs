//! Provider scope for the navigation context.
//!
//! Mounting a [`NavigationProvider`] binds a context to a router and makes it
//! reachable through [`use_navigation`] on the current thread until the
//! provider is dropped. Providers nest; the innermost one wins.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::context::NavigationContext;
use crate::error::NavError;
use crate::listeners::Subscription;
use crate::router::Router;

thread_local! {
    static SCOPE: RefCell<Vec<(u64, NavigationContext)>> = const { RefCell::new(Vec::new()) };
}

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

/// Owns the router subscription and the scope entry of one context.
#[derive(Debug)]
pub struct NavigationProvider {
    context: NavigationContext,
    scope_id: u64,
    _subscription: Subscription,
}

impl NavigationProvider {
    /// Subscribe a fresh context to `router`, synchronize it with the current
    /// route, and install it into this thread's scope.
    pub fn mount(router: Router) -> Self {
        let context = NavigationContext::new(router.clone());
        let subscription = context.attach();
        router.initialize();

        let scope_id = NEXT_SCOPE.fetch_add(1, Ordering::Relaxed);
        SCOPE.with(|scope| scope.borrow_mut().push((scope_id, context.clone())));
        debug!(
            scope_id,
            route = %context.route(),
            listeners = router.listener_count(),
            "navigation provider mounted"
        );

        Self {
            context,
            scope_id,
            _subscription: subscription,
        }
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    /// Release the router subscription and leave the scope.
    pub fn unmount(self) {}
}

impl Drop for NavigationProvider {
    fn drop(&mut self) {
        let id = self.scope_id;
        // The thread-local may already be gone during thread teardown.
        let _ = SCOPE.try_with(|scope| scope.borrow_mut().retain(|(entry, _)| *entry != id));
        debug!(scope_id = id, "navigation provider unmounted");
    }
}

/// Get the innermost mounted navigation context.
///
/// # Panics
///
/// Panics when no [`NavigationProvider`] is mounted on this thread. Use
/// [`try_use_navigation`] where that is an expected condition.
pub fn use_navigation() -> NavigationContext {
    match try_use_navigation() {
        Ok(context) => context,
        Err(err) => panic!("{err}: mount a NavigationProvider before reading navigation state"),
    }
}

/// Get the innermost mounted navigation context, if any.
pub fn try_use_navigation() -> Result<NavigationContext, NavError> {
    SCOPE
        .with(|scope| scope.borrow().last().map(|(_, context)| context.clone()))
        .ok_or(NavError::OutsideProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lift_model::Route;

    #[test]
    fn test_innermost_provider_wins() {
        let outer = NavigationProvider::mount(Router::new());
        let inner = NavigationProvider::mount(Router::starting_at(Route::AboutUs));
        assert_eq!(use_navigation().route(), Route::AboutUs);

        drop(inner);
        assert_eq!(use_navigation().route(), Route::Login);
        outer.unmount();
        assert_eq!(try_use_navigation().unwrap_err(), NavError::OutsideProvider);
    }

    #[test]
    fn test_out_of_order_drop() {
        let first = NavigationProvider::mount(Router::starting_at(Route::Invoice));
        let second = NavigationProvider::mount(Router::starting_at(Route::Quotation));
        drop(first);
        assert_eq!(use_navigation().route(), Route::Quotation);
        drop(second);
        assert!(try_use_navigation().is_err());
    }
}
