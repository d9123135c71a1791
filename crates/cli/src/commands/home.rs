//! The role-dispatched home view.

use raterly_client::router::{ActiveView, ViewRouter};
use raterly_client::views::{AdminView, OwnerDashboardView, StoreListView};

use super::{CliError, Context, fmt_rating};

/// Enter the home view for the persisted session's role and print it.
#[allow(clippy::print_stdout)]
pub async fn show() -> Result<(), CliError> {
    let ctx = Context::bootstrap()?;
    let router = ViewRouter::new(ctx.sessions.current());

    let Some(active) = router.active_view() else {
        return Err(CliError::NotLoggedIn);
    };
    let session = ctx.session()?;

    println!(
        "{} ({})",
        session.user().name,
        session.user().role
    );

    match active {
        ActiveView::Admin => {
            let mut view = AdminView::new(ctx.api.clone());
            view.enter(session).await?;

            if let Some(stats) = view.stats() {
                println!(
                    "{} users / {} stores / {} ratings",
                    stats.total_users, stats.total_stores, stats.total_ratings
                );
            }
            println!();
            super::admin::print_user_table(&view);
            println!();
            super::admin::print_store_table(&view);
        }
        ActiveView::StoreList => {
            let mut view = StoreListView::new(ctx.api.clone());
            view.enter(session).await;

            if let Some(message) = view.last_error() {
                println!("error: {message}");
                return Ok(());
            }
            super::browse::print_store_table(&view);
        }
        ActiveView::OwnerDashboard => {
            let mut view = OwnerDashboardView::new(ctx.api.clone());
            view.refresh(session).await;

            if let Some(message) = view.last_error() {
                println!("error: {message}");
                return Ok(());
            }
            print_owner_report(&view);
        }
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_owner_report(view: &OwnerDashboardView) {
    if view.entries().is_empty() {
        println!("No stores registered to this account");
        return;
    }

    for entry in view.entries() {
        println!(
            "{} (#{}) - average {} over {} ratings",
            entry.store.name,
            entry.store.id,
            fmt_rating(entry.average_rating),
            entry.ratings.len(),
        );
        for rating in &entry.ratings {
            println!(
                "  {}  {} <{}>",
                rating.score, rating.user_name, rating.user_email
            );
        }
    }
}
