//! Data handed from one screen to the next.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use lift_model::Route;

/// A type-erased value passed along with a navigation.
///
/// Cloning is cheap and every clone points at the same value.
#[derive(Clone)]
pub struct Payload {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Payload {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap a value that is already shared.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Get the value if it is a `T`.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.as_ref().is::<T>()
    }

    /// Name of the stored type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if both payloads hold the same allocation.
    pub fn ptr_eq(&self, other: &Payload) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Payload").field(&self.type_name).finish()
    }
}

/// The payload slot: at most one payload, addressed to the route it was sent to.
#[derive(Debug, Clone)]
pub(crate) struct Addressed {
    pub(crate) route: Route,
    pub(crate) payload: Payload,
}
