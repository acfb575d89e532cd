//! HTTP client for the LiftCare customer backend.
//!
//! The client is async and cheap to clone, so the GUI can hand a copy to each
//! `Task::perform()` future.
//!
//! # Example
//!
//! ```no_run
//! use lift_api::{ApiClient, ApiSettings};
//!
//! async fn open_tickets(customer_id: &str) -> lift_api::Result<usize> {
//!     let client = ApiClient::new(&ApiSettings::default())?;
//!     let complaints = client.complaints(customer_id).await?;
//!     Ok(complaints.iter().filter(|c| c.status.is_active()).count())
//! }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;

pub use client::ApiClient;
pub use config::{ApiSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use envelope::Envelope;
pub use error::{ApiError, Result};
