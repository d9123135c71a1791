//! Browsable, ratable store list (the `user` role view).

use raterly_core::{Score, StoreId};
use tracing::instrument;

use crate::api::{ApiClient, ApiError, StoreRecord};
use crate::list::{Completion, ListState};
use crate::query::StoreListQuery;
use crate::session::Session;

/// The store browsing view: one query-driven list plus the rating flow.
#[derive(Debug)]
pub struct StoreListView {
    api: ApiClient,
    list: ListState<StoreListQuery, StoreRecord>,
}

impl StoreListView {
    /// Create the view with default criteria and an empty collection.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            list: ListState::new(StoreListQuery::default()),
        }
    }

    /// Current criteria.
    #[must_use]
    pub const fn query(&self) -> &StoreListQuery {
        self.list.query()
    }

    /// Currently displayed stores.
    #[must_use]
    pub fn stores(&self) -> &[StoreRecord] {
        self.list.items()
    }

    /// Message of the most recent failed fetch, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.list.last_error()
    }

    /// Initial load: fetch with the current criteria.
    pub async fn enter(&mut self, session: &Session) -> Completion {
        let ticket = self.list.refresh();
        let result = self.fetch(session).await;
        self.list.complete(ticket, result)
    }

    /// Replace the criteria; fetches only when they changed by value.
    ///
    /// Returns `None` when the criteria were unchanged and no fetch was
    /// issued.
    pub async fn set_query(
        &mut self,
        session: &Session,
        query: StoreListQuery,
    ) -> Option<Completion> {
        let ticket = self.list.request(query)?;
        let result = self.fetch(session).await;
        Some(self.list.complete(ticket, result))
    }

    /// Submit a rating, then re-fetch the list so the displayed aggregate
    /// and own-rating come from the backend.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` if the submission is rejected;
    /// the displayed collection is left unchanged in that case. A failure
    /// of the follow-up fetch is recorded on the list, not returned.
    #[instrument(skip(self, session), fields(store_id = %store_id, score = %score))]
    pub async fn rate(
        &mut self,
        session: &Session,
        store_id: StoreId,
        score: Score,
    ) -> Result<(), ApiError> {
        self.api
            .submit_rating(session.token(), store_id, score)
            .await?;

        let ticket = self.list.refresh();
        let result = self.fetch(session).await;
        self.list.complete(ticket, result);
        Ok(())
    }

    async fn fetch(&self, session: &Session) -> Result<Vec<StoreRecord>, String> {
        self.api
            .stores(session.token(), self.list.query())
            .await
            .map_err(|e| e.to_string())
    }
}
