//! Admin table commands.

use raterly_core::Role;

use raterly_client::query::{
    AdminStoreListQuery, AdminStoreSortField, SortCriteria, SortOrder, UserListQuery,
    UserSortField,
};
use raterly_client::views::AdminView;

use super::{CliError, Context, parse_arg};

/// Fetch and print the admin user table for the given criteria.
#[allow(clippy::print_stdout)]
pub async fn users(
    name: String,
    email: String,
    address: String,
    role: Option<&str>,
    sort_by: &str,
    order: &str,
) -> Result<(), CliError> {
    let ctx = Context::bootstrap()?;
    let session = ctx.session()?;

    let query = UserListQuery {
        name,
        email,
        address,
        role: role
            .map(|value| parse_arg::<Role>("role", value))
            .transpose()?,
        sort: SortCriteria {
            by: parse_arg::<UserSortField>("sort column", sort_by)?,
            order: parse_arg::<SortOrder>("sort order", order)?,
        },
    };

    let mut view = AdminView::new(ctx.api.clone());
    view.set_user_query(session, query).await;

    if let Some(message) = view.users_error() {
        println!("error: {message}");
        return Ok(());
    }

    print_user_table(&view);
    Ok(())
}

/// Fetch and print the admin store table for the given criteria.
#[allow(clippy::print_stdout)]
pub async fn stores(
    name: String,
    email: String,
    address: String,
    sort_by: &str,
    order: &str,
) -> Result<(), CliError> {
    let ctx = Context::bootstrap()?;
    let session = ctx.session()?;

    let query = AdminStoreListQuery {
        name,
        email,
        address,
        sort: SortCriteria {
            by: parse_arg::<AdminStoreSortField>("sort column", sort_by)?,
            order: parse_arg::<SortOrder>("sort order", order)?,
        },
    };

    let mut view = AdminView::new(ctx.api.clone());
    view.set_store_query(session, query).await;

    if let Some(message) = view.stores_error() {
        println!("error: {message}");
        return Ok(());
    }

    print_store_table(&view);
    Ok(())
}

#[allow(clippy::print_stdout)]
pub(super) fn print_user_table(view: &AdminView) {
    if view.users().is_empty() {
        println!("No users found");
        return;
    }

    println!(
        "{:>6}  {:<30} {:<30} {:<30} {:<6}",
        "id", "name", "email", "address", "role"
    );
    for user in view.users() {
        println!(
            "{:>6}  {:<30} {:<30} {:<30} {:<6}",
            user.id, user.name, user.email, user.address, user.role,
        );
    }
}

#[allow(clippy::print_stdout)]
pub(super) fn print_store_table(view: &AdminView) {
    if view.stores().is_empty() {
        println!("No stores found");
        return;
    }

    println!(
        "{:>6}  {:<30} {:<30} {:>8} {:>7}",
        "id", "name", "address", "average", "count"
    );
    for store in view.stores() {
        println!(
            "{:>6}  {:<30} {:<30} {:>8} {:>7}",
            store.id,
            store.name,
            store.address,
            super::fmt_rating(store.average_rating),
            store.rating_count,
        );
    }
}
