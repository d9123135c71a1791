//! Filter and sort criteria for the list views.
//!
//! Each list view owns one query value (filter + sort). Criteria are
//! compared by value: the list controller only issues a fetch when the
//! whole query actually changed. `query_pairs()` renders a query into the
//! `(key, value)` pairs the backend expects, omitting empty filter fields.

use raterly_core::Role;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire form of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// The active sort key and direction. Exactly one key is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortCriteria<F> {
    /// Field to sort by.
    pub by: F,
    /// Direction.
    pub order: SortOrder,
}

/// Sortable columns of the admin user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSortField {
    /// Sort by display name.
    #[default]
    Name,
    /// Sort by email.
    Email,
    /// Sort by address.
    Address,
    /// Sort by role.
    Role,
}

impl UserSortField {
    /// Wire form of the column key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::Role => "role",
        }
    }
}

impl std::str::FromStr for UserSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "address" => Ok(Self::Address),
            "role" => Ok(Self::Role),
            _ => Err(format!("invalid user sort field: {s}")),
        }
    }
}

/// Sortable columns of the admin store table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminStoreSortField {
    /// Sort by store name.
    #[default]
    Name,
    /// Sort by contact email.
    Email,
    /// Sort by address.
    Address,
    /// Sort by average rating.
    Rating,
}

impl AdminStoreSortField {
    /// Wire form of the column key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::Rating => "rating",
        }
    }
}

impl std::str::FromStr for AdminStoreSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "address" => Ok(Self::Address),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid store sort field: {s}")),
        }
    }
}

/// Sortable columns of the browsable store list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreSortField {
    /// Sort by store name.
    #[default]
    Name,
    /// Sort by address.
    Address,
    /// Sort by overall rating.
    Rating,
}

impl StoreSortField {
    /// Wire form of the column key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Rating => "rating",
        }
    }
}

impl std::str::FromStr for StoreSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "address" => Ok(Self::Address),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid store sort field: {s}")),
        }
    }
}

/// Admin user table query: substring filters plus an optional role filter.
///
/// Empty strings mean "no constraint on this field" and are omitted from
/// the rendered query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserListQuery {
    /// Substring filter on the display name.
    pub name: String,
    /// Substring filter on the email.
    pub email: String,
    /// Substring filter on the address.
    pub address: String,
    /// Exact role filter; `None` matches every role.
    pub role: Option<Role>,
    /// Active sort.
    pub sort: SortCriteria<UserSortField>,
}

impl UserListQuery {
    /// Render as `(key, value)` pairs for the backend.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_non_empty(&mut pairs, "name", &self.name);
        push_non_empty(&mut pairs, "email", &self.email);
        push_non_empty(&mut pairs, "address", &self.address);
        if let Some(role) = self.role {
            pairs.push(("role", role.to_string()));
        }
        pairs.push(("sort_by", self.sort.by.as_str().to_string()));
        pairs.push(("order", self.sort.order.as_str().to_string()));
        pairs
    }
}

/// Admin store table query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminStoreListQuery {
    /// Substring filter on the store name.
    pub name: String,
    /// Substring filter on the contact email.
    pub email: String,
    /// Substring filter on the address.
    pub address: String,
    /// Active sort.
    pub sort: SortCriteria<AdminStoreSortField>,
}

impl AdminStoreListQuery {
    /// Render as `(key, value)` pairs for the backend.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_non_empty(&mut pairs, "name", &self.name);
        push_non_empty(&mut pairs, "email", &self.email);
        push_non_empty(&mut pairs, "address", &self.address);
        pairs.push(("sort_by", self.sort.by.as_str().to_string()));
        pairs.push(("order", self.sort.order.as_str().to_string()));
        pairs
    }
}

/// Browsable store list query: name/address filters only, no role.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreListQuery {
    /// Substring filter on the store name.
    pub name: String,
    /// Substring filter on the address.
    pub address: String,
    /// Active sort.
    pub sort: SortCriteria<StoreSortField>,
}

impl StoreListQuery {
    /// Render as `(key, value)` pairs for the backend.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_non_empty(&mut pairs, "name", &self.name);
        push_non_empty(&mut pairs, "address", &self.address);
        pairs.push(("sort_by", self.sort.by.as_str().to_string()));
        pairs.push(("order", self.sort.order.as_str().to_string()));
        pairs
    }
}

fn push_non_empty(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    if !value.is_empty() {
        pairs.push((key, value.to_string()));
    }
}
