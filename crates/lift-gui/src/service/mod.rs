//! Services for background tasks.
//!
//! Async functions for use with Iced's `Task::perform` pattern. Each takes
//! owned inputs so the returned future is `'static`.

pub mod auth;
pub mod customer;
