//! Integration tests for the Raterly client.
//!
//! # Running Tests
//!
//! These tests drive a real Raterly backend and are `#[ignore]`d by
//! default. To run them:
//!
//! ```bash
//! # Point the tests at a backend with the seeded test accounts
//! export RATERLY_TEST_API_URL=http://localhost:8000
//! export RATERLY_TEST_USER_EMAIL=user@test.raterly.dev
//! export RATERLY_TEST_USER_PASSWORD='Valid#Pass1'
//!
//! cargo test -p raterly-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_flows` - login/signup/session persistence against the backend
//! - `store_ratings` - store browsing and the rating round-trip

use std::time::Duration;

use raterly_client::{ApiClient, ClientConfig};

/// Base URL for the test backend (configurable via environment).
#[must_use]
pub fn test_api_url() -> String {
    std::env::var("RATERLY_TEST_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Credentials of the seeded role=user test account.
#[must_use]
pub fn test_user_credentials() -> (String, String) {
    let email = std::env::var("RATERLY_TEST_USER_EMAIL")
        .unwrap_or_else(|_| "user@test.raterly.dev".to_string());
    let password =
        std::env::var("RATERLY_TEST_USER_PASSWORD").unwrap_or_else(|_| "Valid#Pass1".to_string());
    (email, password)
}

/// Build an API client against the test backend.
///
/// # Panics
///
/// Panics if the configured test URL is not a valid http/https URL.
#[must_use]
pub fn test_client(data_dir: &std::path::Path) -> (ApiClient, ClientConfig) {
    let config = ClientConfig {
        api_url: test_api_url().parse().expect("valid RATERLY_TEST_API_URL"),
        data_dir: data_dir.to_path_buf(),
        http_timeout: Duration::from_secs(10),
    };
    (ApiClient::new(&config), config)
}
