//! Admin overview (the `admin` role view): platform totals plus the
//! filterable user and store tables.

use secrecy::SecretString;
use tracing::instrument;

use crate::api::{AdminStats, AdminStoreRecord, ApiClient, ApiError, UserProfile};
use crate::list::{Completion, ListState};
use crate::query::{AdminStoreListQuery, UserListQuery};
use crate::session::Session;

/// The admin view: a stats snapshot taken once per entry, and two
/// independent query-driven tables.
#[derive(Debug)]
pub struct AdminView {
    api: ApiClient,
    stats: Option<AdminStats>,
    users: ListState<UserListQuery, UserProfile>,
    stores: ListState<AdminStoreListQuery, AdminStoreRecord>,
}

impl AdminView {
    /// Create the view with default criteria and empty tables.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            stats: None,
            users: ListState::new(UserListQuery::default()),
            stores: ListState::new(AdminStoreListQuery::default()),
        }
    }

    /// The totals snapshot, present after a successful
    /// [`enter`](Self::enter). Point-in-time: not kept live.
    #[must_use]
    pub const fn stats(&self) -> Option<AdminStats> {
        self.stats
    }

    /// Current user-table criteria.
    #[must_use]
    pub const fn user_query(&self) -> &UserListQuery {
        self.users.query()
    }

    /// Currently displayed user table.
    #[must_use]
    pub fn users(&self) -> &[UserProfile] {
        self.users.items()
    }

    /// Message of the most recent failed user-table fetch, if any.
    #[must_use]
    pub fn users_error(&self) -> Option<&str> {
        self.users.last_error()
    }

    /// Current store-table criteria.
    #[must_use]
    pub const fn store_query(&self) -> &AdminStoreListQuery {
        self.stores.query()
    }

    /// Currently displayed store table.
    #[must_use]
    pub fn stores(&self) -> &[AdminStoreRecord] {
        self.stores.items()
    }

    /// Message of the most recent failed store-table fetch, if any.
    #[must_use]
    pub fn stores_error(&self) -> Option<&str> {
        self.stores.last_error()
    }

    /// Enter the view: take the stats snapshot and load both tables with
    /// their current criteria.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the stats fetch fails; table fetch failures
    /// are recorded on the tables instead (previous contents stay on
    /// display).
    #[instrument(skip_all)]
    pub async fn enter(&mut self, session: &Session) -> Result<(), ApiError> {
        self.stats = Some(self.api.admin_stats(session.token()).await?);

        let ticket = self.users.refresh();
        let result = fetch_users(&self.api, session.token(), self.users.query()).await;
        self.users.complete(ticket, result);

        let ticket = self.stores.refresh();
        let result = fetch_stores(&self.api, session.token(), self.stores.query()).await;
        self.stores.complete(ticket, result);

        Ok(())
    }

    /// Replace the user-table criteria; fetches only when they changed by
    /// value.
    ///
    /// Returns `None` when the criteria were unchanged and no fetch was
    /// issued.
    pub async fn set_user_query(
        &mut self,
        session: &Session,
        query: UserListQuery,
    ) -> Option<Completion> {
        let ticket = self.users.request(query)?;
        let result = fetch_users(&self.api, session.token(), self.users.query()).await;
        Some(self.users.complete(ticket, result))
    }

    /// Replace the store-table criteria; fetches only when they changed by
    /// value.
    ///
    /// Returns `None` when the criteria were unchanged and no fetch was
    /// issued.
    pub async fn set_store_query(
        &mut self,
        session: &Session,
        query: AdminStoreListQuery,
    ) -> Option<Completion> {
        let ticket = self.stores.request(query)?;
        let result = fetch_stores(&self.api, session.token(), self.stores.query()).await;
        Some(self.stores.complete(ticket, result))
    }
}

async fn fetch_users(
    api: &ApiClient,
    token: &SecretString,
    query: &UserListQuery,
) -> Result<Vec<UserProfile>, String> {
    api.admin_users(token, query).await.map_err(|e| e.to_string())
}

async fn fetch_stores(
    api: &ApiClient,
    token: &SecretString,
    query: &AdminStoreListQuery,
) -> Result<Vec<AdminStoreRecord>, String> {
    api.admin_stores(token, query).await.map_err(|e| e.to_string())
}
