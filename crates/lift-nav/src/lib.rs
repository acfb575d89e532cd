//! Client-side navigation for the LiftCare customer portal.
//!
//! - [`Router`]: the current route, with ordered synchronous subscribers
//! - [`NavigationContext`]: route mirror, session and payload slot for screens
//! - [`NavigationProvider`]: binds a context to a router and scopes it to the
//!   current thread ([`use_navigation`])
//! - [`Dispatcher`]: picks the [`Screen`] for a route, applying the
//!   sub-customer gate on user creation
//!
//! # Example
//!
//! ```
//! use lift_model::Route;
//! use lift_nav::{NavigationProvider, Payload, Router, use_navigation};
//!
//! let router = Router::new();
//! let provider = NavigationProvider::mount(router.clone());
//!
//! let nav = use_navigation();
//! nav.navigate_to("/otp", Some(Payload::new("owner@tower.in".to_string())))
//!     .unwrap();
//! assert_eq!(router.current_route(), Route::Otp);
//! assert_eq!(nav.current_payload::<String>().as_deref().map(String::as_str), Some("owner@tower.in"));
//!
//! provider.unmount();
//! assert_eq!(router.listener_count(), 0);
//! ```

pub mod context;
pub mod dispatch;
pub mod error;
mod listeners;
pub mod payload;
pub mod provider;
pub mod router;

pub use context::{ContextEvent, NavigationContext};
pub use dispatch::{Dispatcher, Screen, ScreenTable};
pub use error::NavError;
pub use listeners::{ListenerId, Subscription};
pub use payload::Payload;
pub use provider::{NavigationProvider, try_use_navigation, use_navigation};
pub use router::{MAX_CASCADE, Router};
