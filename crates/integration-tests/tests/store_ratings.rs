//! Integration tests for store browsing and the rating round-trip.
//!
//! These tests require:
//! - A running Raterly backend at `RATERLY_TEST_API_URL`
//! - The seeded role=user test account and at least one store
//!
//! Run with: `cargo test -p raterly-integration-tests -- --ignored`

use secrecy::SecretString;

use raterly_client::auth::AuthFlow;
use raterly_client::query::{SortCriteria, SortOrder, StoreListQuery, StoreSortField};
use raterly_client::views::StoreListView;
use raterly_client::{Session, SessionStore};
use raterly_core::Score;

use raterly_integration_tests::{test_client, test_user_credentials};

async fn logged_in_session(data_dir: &std::path::Path) -> (raterly_client::ApiClient, SessionStore)
{
    let (api, config) = test_client(data_dir);
    let mut sessions = SessionStore::open(&config.data_dir).expect("open session store");

    let (email, password) = test_user_credentials();
    AuthFlow::new(api.clone())
        .login(&mut sessions, &email, &SecretString::from(password))
        .await
        .expect("login with seeded credentials");

    (api, sessions)
}

fn session(sessions: &SessionStore) -> &Session {
    sessions.current().expect("logged-in session")
}

#[tokio::test]
#[ignore = "Requires a running Raterly backend"]
async fn test_store_list_loads_for_user_role() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (api, sessions) = logged_in_session(dir.path()).await;

    let mut view = StoreListView::new(api);
    view.enter(session(&sessions)).await;

    assert!(view.last_error().is_none(), "{:?}", view.last_error());
    assert!(!view.stores().is_empty(), "seeded backend has stores");
}

#[tokio::test]
#[ignore = "Requires a running Raterly backend"]
async fn test_filter_change_refetches_and_sorts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (api, sessions) = logged_in_session(dir.path()).await;

    let mut view = StoreListView::new(api);
    view.enter(session(&sessions)).await;

    let query = StoreListQuery {
        name: String::new(),
        address: String::new(),
        sort: SortCriteria {
            by: StoreSortField::Name,
            order: SortOrder::Desc,
        },
    };
    view.set_query(session(&sessions), query).await;
    assert!(view.last_error().is_none());

    let names: Vec<_> = view.stores().iter().map(|s| s.name.clone()).collect();
    let mut sorted = names.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(names, sorted, "backend should return name-descending order");
}

#[tokio::test]
#[ignore = "Requires a running Raterly backend"]
async fn test_rating_round_trip_shows_own_rating() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (api, sessions) = logged_in_session(dir.path()).await;

    let mut view = StoreListView::new(api);
    view.enter(session(&sessions)).await;
    let target = view.stores().first().expect("seeded store").id;

    let score = Score::new(4).expect("valid score");
    view.rate(session(&sessions), target, score)
        .await
        .expect("rating accepted");

    // The view re-fetched after the mutation; the authoritative list now
    // carries our own rating.
    let store = view
        .stores()
        .iter()
        .find(|store| store.id == target)
        .expect("rated store still listed");
    assert_eq!(store.my_rating, Some(score));
    assert!(store.rating_count >= 1);
}
