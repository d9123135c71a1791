//! Owner's per-store rating report (the `owner` role view).
//!
//! The owner dashboard endpoint takes no filter or sort parameters, so
//! this view is a plain fetch-and-replace report rather than a
//! query-driven list.

use tracing::instrument;

use crate::api::{ApiClient, OwnerDashboardEntry};
use crate::session::Session;

/// The owner dashboard view.
#[derive(Debug)]
pub struct OwnerDashboardView {
    api: ApiClient,
    entries: Vec<OwnerDashboardEntry>,
    last_error: Option<String>,
}

impl OwnerDashboardView {
    /// Create the view with an empty report.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self {
            api,
            entries: Vec::new(),
            last_error: None,
        }
    }

    /// Currently displayed report.
    #[must_use]
    pub fn entries(&self) -> &[OwnerDashboardEntry] {
        &self.entries
    }

    /// Message of the most recent failed fetch, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetch the report, replacing the whole collection on success. A
    /// failure keeps the previous report on display and records the
    /// message.
    #[instrument(skip_all)]
    pub async fn refresh(&mut self, session: &Session) {
        match self.api.owner_dashboard(session.token()).await {
            Ok(entries) => {
                self.entries = entries;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }
}
