//! State of a fetched, searchable list.

use chrono::{DateTime, Local};
use lift_api::ApiError;
use lift_model::{Searchable, filter_items};

/// Backend collections shown as lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Complaints,
    Contracts,
    Maintenance,
    Invoices,
    Quotations,
    Profiles,
}

impl Resource {
    /// Label used in log lines and error titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complaints => "complaints",
            Self::Contracts => "AMC contracts",
            Self::Maintenance => "maintenance schedule",
            Self::Invoices => "invoices",
            Self::Quotations => "quotations",
            Self::Profiles => "profiles",
        }
    }
}

/// A list fetched from the backend.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    /// Items from the last successful fetch.
    pub items: Vec<T>,
    /// A fetch is in flight.
    pub loading: bool,
    /// Free-text filter.
    pub search: String,
    /// Message from the last failed fetch.
    pub error: Option<String>,
    /// When the items were fetched.
    pub loaded_at: Option<DateTime<Local>>,
    /// Rows rendered; grows with "show more".
    pub shown: usize,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            search: String::new(),
            error: None,
            loaded_at: None,
            shown: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Mark a fetch as started. Returns false if one is already running.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Store the outcome of a fetch.
    ///
    /// On failure the previous items are kept so the screen still has
    /// something to show.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.shown = 0;
                self.loaded_at = Some(Local::now());
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message().to_string());
                Err(err)
            }
        }
    }

    /// Rows to render for the configured page size.
    pub fn visible(&self, page_size: usize) -> usize {
        self.shown.max(page_size)
    }

    /// Reveal one more page.
    pub fn show_more(&mut self, page_size: usize) {
        self.shown = self.visible(page_size) + page_size;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    /// Drop everything, including the search text.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl<T: Searchable> ListState<T> {
    /// Items matching the search text, in fetch order.
    pub fn filtered(&self) -> Vec<&T> {
        filter_items(&self.items, &self.search)
    }
}
