//! Store browsing and rating commands (user role).

use raterly_core::{Score, StoreId};

use raterly_client::query::{SortCriteria, SortOrder, StoreListQuery, StoreSortField};
use raterly_client::views::StoreListView;

use super::{CliError, Context, fmt_rating, parse_arg};

/// Fetch and print the store list for the given criteria.
#[allow(clippy::print_stdout)]
pub async fn stores(
    name: String,
    address: String,
    sort_by: &str,
    order: &str,
) -> Result<(), CliError> {
    let ctx = Context::bootstrap()?;
    let session = ctx.session()?;

    let query = StoreListQuery {
        name,
        address,
        sort: SortCriteria {
            by: parse_arg::<StoreSortField>("sort column", sort_by)?,
            order: parse_arg::<SortOrder>("sort order", order)?,
        },
    };

    let mut view = StoreListView::new(ctx.api.clone());
    view.set_query(session, query).await;

    if let Some(message) = view.last_error() {
        println!("error: {message}");
        return Ok(());
    }

    print_store_table(&view);
    Ok(())
}

/// Submit a rating, then print the refreshed list entry.
#[allow(clippy::print_stdout)]
pub async fn rate(store_id: i64, score: u8) -> Result<(), CliError> {
    let ctx = Context::bootstrap()?;
    let session = ctx.session()?;

    let store_id = StoreId::new(store_id);
    let score = Score::new(score).map_err(|e| CliError::InvalidArg {
        what: "score",
        message: e.to_string(),
    })?;

    let mut view = StoreListView::new(ctx.api.clone());
    view.rate(session, store_id, score).await?;

    match view.stores().iter().find(|store| store.id == store_id) {
        Some(store) => println!(
            "Rated {} with {}; overall {} across {} ratings",
            store.name,
            score,
            fmt_rating(store.overall_rating),
            store.rating_count,
        ),
        None => println!("Rated store {store_id} with {score}"),
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub(super) fn print_store_table(view: &StoreListView) {
    if view.stores().is_empty() {
        println!("No stores found");
        return;
    }

    println!(
        "{:>6}  {:<30} {:<30} {:>8} {:>6} {:>7}",
        "id", "name", "address", "overall", "mine", "count"
    );
    for store in view.stores() {
        println!(
            "{:>6}  {:<30} {:<30} {:>8} {:>6} {:>7}",
            store.id,
            store.name,
            store.address,
            fmt_rating(store.overall_rating),
            store
                .my_rating
                .map_or_else(|| "-".to_string(), |score| score.to_string()),
            store.rating_count,
        );
    }
}
