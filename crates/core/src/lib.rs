//! Raterly Core - Shared types library.
//!
//! This crate provides common types used across all Raterly client
//! components:
//! - `client` - Session, auth, and view-synchronization core
//! - `cli` - Terminal front-end over the client core
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, and
//!   rating scores

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
