//! LiftCare - GUI Library
//!
//! Application types for the LiftCare customer desktop app: account sign-in,
//! complaints, maintenance visits, contracts and billing for elevator owners.
//!
//! Built with Iced 0.14.0 using the Elm architecture. Routing, the session
//! and per-navigation payloads live in `lift-nav`; this crate renders the
//! screen the dispatcher selects and turns user input into backend calls.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::GuiError;
pub use settings::Settings;
