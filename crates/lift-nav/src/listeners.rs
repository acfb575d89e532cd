//! Ordered listener lists and the subscription guard that removes from them.

use std::fmt;
use std::sync::Arc;

/// Identifier of one registration in a listener list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// A registered callback.
pub(crate) type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Callbacks in registration order.
pub(crate) struct ListenerList<T> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<T>)>,
}

impl<T> Default for ListenerList<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> ListenerList<T> {
    /// Append a listener.
    pub(crate) fn add(&mut self, listener: Listener<T>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener; returns false if it was already gone.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copy of the current registrations, taken before a notification pass so
    /// that listeners may subscribe or unsubscribe while it runs.
    pub(crate) fn snapshot(&self) -> Vec<(ListenerId, Listener<T>)> {
        self.entries.clone()
    }
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

type Release = Box<dyn FnOnce(ListenerId) + Send + Sync>;

/// Handle to one listener registration.
///
/// Dropping the handle unsubscribes. [`Subscription::unsubscribe`] does the
/// same eagerly and may be called any number of times.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    id: ListenerId,
    release: Option<Release>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, release: impl FnOnce(ListenerId) + Send + Sync + 'static) -> Self {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }

    /// Get the registration id.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Check if the listener is still registered through this handle.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Remove the listener. Later calls do nothing.
    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_add_remove_preserves_order() {
        let mut list: ListenerList<u8> = ListenerList::default();
        let a = list.add(Arc::new(|_| {}));
        let b = list.add(Arc::new(|_| {}));
        let c = list.add(Arc::new(|_| {}));
        assert!(list.remove(b));
        assert!(!list.remove(b));
        let ids: Vec<_> = list.snapshot().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_subscription_releases_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);
        let mut sub = Subscription::new(ListenerId(7), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(sub.is_active());
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        drop(sub);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
