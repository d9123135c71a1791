//! Role-specific top-level views.
//!
//! One module per view, mirroring the role dispatch in
//! [`crate::router`]: admins get the overview with filterable tables,
//! users the browsable store list, owners the per-store rating report.
//! Each view owns its query state and result collections and drives the
//! shared [`crate::api::ApiClient`]; rendering them is the front-end's
//! job.

pub mod admin;
pub mod owner;
pub mod stores;

pub use admin::AdminView;
pub use owner::OwnerDashboardView;
pub use stores::StoreListView;
