//! Generic query-driven list controller.
//!
//! A [`ListState`] binds one query value (filter + sort criteria) to one
//! result collection. Callers ask for a fetch by handing in the new query;
//! the controller only issues one when the query actually changed by
//! value, and hands back a [`FetchTicket`] identifying the fetch. When the
//! fetch completes the caller returns the ticket with the outcome and the
//! controller decides whether to apply it.
//!
//! Tickets carry a monotonically increasing sequence number. A completion
//! is applied only when nothing newer has been applied yet, so two
//! in-flight fetches resolve deterministically last-request-wins: a stale
//! response can never overwrite newer state. (The system this client
//! replaces let the last *resolver* win; the sequencing guard is a
//! deliberate behavioral change.)
//!
//! Failed completions keep the previous collection on display and record
//! the message in `last_error` for the rendering layer to surface.

/// Identifies one issued fetch of one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

/// Outcome of handing a completed fetch back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The collection was replaced with the fetched items.
    Applied,
    /// The fetch failed; previous items kept, error recorded.
    Failed,
    /// A newer fetch was already applied; this result was discarded.
    Stale,
}

/// Query-driven list state: criteria, result collection, and fetch
/// sequencing.
#[derive(Debug)]
pub struct ListState<Q, T> {
    query: Q,
    items: Vec<T>,
    last_issued: Option<Q>,
    next_seq: u64,
    applied_seq: u64,
    last_error: Option<String>,
}

impl<Q: Clone + PartialEq, T> ListState<Q, T> {
    /// Create a controller with the given initial criteria and an empty
    /// collection. No fetch is issued until [`request`](Self::request) or
    /// [`refresh`](Self::refresh) is called.
    #[must_use]
    pub const fn new(query: Q) -> Self {
        Self {
            query,
            items: Vec::new(),
            last_issued: None,
            next_seq: 0,
            applied_seq: 0,
            last_error: None,
        }
    }

    /// Current criteria.
    #[must_use]
    pub const fn query(&self) -> &Q {
        &self.query
    }

    /// Currently displayed collection.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Message of the most recent failed fetch, cleared by the next
    /// applied one.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the criteria, issuing a fetch only when they differ by
    /// value from the last issued criteria.
    ///
    /// Returns `None` when the criteria are unchanged: applying an
    /// identical query twice in a row must not produce a redundant fetch.
    pub fn request(&mut self, query: Q) -> Option<FetchTicket> {
        if self.last_issued.as_ref() == Some(&query) {
            self.query = query;
            return None;
        }

        self.query = query.clone();
        self.last_issued = Some(query);
        Some(self.issue())
    }

    /// Unconditionally issue a fetch for the current criteria.
    ///
    /// Used for the initial load of a view and after a mutation (rating
    /// submission), where the authoritative state must be re-read even
    /// though the criteria did not change.
    pub fn refresh(&mut self) -> FetchTicket {
        self.last_issued = Some(self.query.clone());
        self.issue()
    }

    /// Hand a completed fetch back to the controller.
    ///
    /// A successful result replaces the whole collection; a failed one
    /// keeps the previous collection and records the message. Either way
    /// the result is discarded as [`Completion::Stale`] when a
    /// later-issued fetch has already been applied.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<T>, String>,
    ) -> Completion {
        if ticket.seq <= self.applied_seq {
            return Completion::Stale;
        }
        self.applied_seq = ticket.seq;

        match result {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
                Completion::Applied
            }
            Err(message) => {
                self.last_error = Some(message);
                Completion::Failed
            }
        }
    }

    fn issue(&mut self) -> FetchTicket {
        self.next_seq += 1;
        FetchTicket { seq: self.next_seq }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use crate::query::{SortCriteria, SortOrder, StoreListQuery, StoreSortField};

    fn named(name: &str) -> StoreListQuery {
        StoreListQuery {
            name: name.to_string(),
            ..StoreListQuery::default()
        }
    }

    #[test]
    fn test_first_request_issues_fetch() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());
        assert!(list.request(StoreListQuery::default()).is_some());
    }

    #[test]
    fn test_identical_query_issues_no_redundant_fetch() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());

        let ticket = list.request(named("books")).unwrap();
        list.complete(ticket, Ok(vec!["a".to_string()]));

        // Same criteria by value, fresh object: no new fetch.
        assert!(list.request(named("books")).is_none());
        assert_eq!(list.items(), ["a".to_string()]);
    }

    #[test]
    fn test_changed_query_issues_fetch() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());

        let first = list.request(named("books")).unwrap();
        list.complete(first, Ok(vec![]));

        let changed = StoreListQuery {
            name: "books".to_string(),
            address: String::new(),
            sort: SortCriteria {
                by: StoreSortField::Rating,
                order: SortOrder::Desc,
            },
        };
        assert!(list.request(changed).is_some());
    }

    #[test]
    fn test_success_replaces_whole_collection() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());

        let first = list.refresh();
        list.complete(first, Ok(vec!["a".to_string(), "b".to_string()]));

        let second = list.refresh();
        let outcome = list.complete(second, Ok(vec!["c".to_string()]));
        assert_eq!(outcome, Completion::Applied);
        assert_eq!(list.items(), ["c".to_string()]);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());

        let older = list.request(named("a")).unwrap();
        let newer = list.request(named("ab")).unwrap();

        // The newer fetch resolves first...
        assert_eq!(
            list.complete(newer, Ok(vec!["fresh".to_string()])),
            Completion::Applied
        );
        // ...and the older one, resolving late, must not overwrite it.
        assert_eq!(
            list.complete(older, Ok(vec!["stale".to_string()])),
            Completion::Stale
        );
        assert_eq!(list.items(), ["fresh".to_string()]);
    }

    #[test]
    fn test_failure_keeps_items_and_records_error() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());

        let first = list.refresh();
        list.complete(first, Ok(vec!["kept".to_string()]));

        let failing = list.refresh();
        let outcome = list.complete(failing, Err("Request failed (502)".to_string()));
        assert_eq!(outcome, Completion::Failed);
        assert_eq!(list.items(), ["kept".to_string()]);
        assert_eq!(list.last_error(), Some("Request failed (502)"));
    }

    #[test]
    fn test_applied_fetch_clears_previous_error() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());

        let failing = list.refresh();
        list.complete(failing, Err("boom".to_string()));
        assert!(list.last_error().is_some());

        let ok = list.refresh();
        list.complete(ok, Ok(vec![]));
        assert!(list.last_error().is_none());
    }

    #[test]
    fn test_stale_failure_does_not_clobber_applied_state() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());

        let older = list.request(named("a")).unwrap();
        let newer = list.request(named("ab")).unwrap();

        list.complete(newer, Ok(vec!["fresh".to_string()]));
        assert_eq!(
            list.complete(older, Err("late failure".to_string())),
            Completion::Stale
        );
        assert!(list.last_error().is_none());
        assert_eq!(list.items(), ["fresh".to_string()]);
    }

    #[test]
    fn test_refresh_always_issues() {
        let mut list: ListState<StoreListQuery, String> =
            ListState::new(StoreListQuery::default());

        let first = list.refresh();
        list.complete(first, Ok(vec![]));

        // Criteria unchanged, but a mutation happened upstream.
        let second = list.refresh();
        assert_ne!(first, second);
    }
}
