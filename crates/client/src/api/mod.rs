//! HTTP client for the Raterly backend.
//!
//! One [`ApiClient`] per configured backend; cheap to clone. Every
//! authenticated call sends the session's bearer token; every non-2xx
//! response is folded through [`error::normalize_error`] into an
//! [`error::ApiError::Status`] carrying a single displayable message.

pub mod error;
mod types;

use std::sync::Arc;

use reqwest::Response;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use raterly_core::{Score, StoreId};

use crate::config::ClientConfig;
use crate::query::{AdminStoreListQuery, StoreListQuery, UserListQuery};

pub use error::{ApiError, normalize_error};
pub use types::{
    AdminStats, AdminStoreRecord, AuthGrant, OwnerDashboardEntry, RatingEntry, SignupDetails,
    StoreRecord, StoreRef, UserProfile,
};

use types::{AuthResponse, ChangePasswordRequest, LoginRequest, RateRequest, SignupRequest};

/// Raterly backend API client.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client from the loaded configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed (TLS
    /// backend initialization failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    // =========================================================================
    // Auth endpoints
    // =========================================================================

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with the normalized backend message on
    /// rejected credentials, or `ApiError::Transport` if the request never
    /// completed.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<AuthGrant, ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/auth/login"))
            .json(&LoginRequest {
                email,
                password: password.expose_secret(),
            })
            .send()
            .await?;

        let auth: AuthResponse = read_json(response).await?;
        debug!(user_id = %auth.user.id, role = %auth.user.role, "Login accepted");

        Ok(AuthGrant {
            token: SecretString::from(auth.access_token),
            user: auth.user,
        })
    }

    /// Register a new account.
    ///
    /// On success the backend issues a session immediately, exactly as for
    /// login.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with the normalized backend message when
    /// the submission is rejected (including format-constraint violations,
    /// which are enforced server-side only).
    #[instrument(skip(self, details), fields(email = %details.email))]
    pub async fn signup(&self, details: &SignupDetails) -> Result<AuthGrant, ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/auth/signup"))
            .json(&SignupRequest {
                name: &details.name,
                email: &details.email,
                address: &details.address,
                password: details.password.expose_secret(),
            })
            .send()
            .await?;

        let auth: AuthResponse = read_json(response).await?;
        debug!(user_id = %auth.user.id, "Signup accepted");

        Ok(AuthGrant {
            token: SecretString::from(auth.access_token),
            user: auth.user,
        })
    }

    /// Rotate the account password. The current token stays valid.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with the normalized backend message when
    /// the old password is wrong or the new one is rejected.
    #[instrument(skip(self, token, old_password, new_password))]
    pub async fn change_password(
        &self,
        token: &SecretString,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .put(self.endpoint("/auth/password"))
            .bearer_auth(token.expose_secret())
            .json(&ChangePasswordRequest {
                old_password: old_password.expose_secret(),
                new_password: new_password.expose_secret(),
            })
            .send()
            .await?;

        read_unit(response).await
    }

    // =========================================================================
    // Admin endpoints
    // =========================================================================

    /// Fetch the platform totals snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    #[instrument(skip(self, token))]
    pub async fn admin_stats(&self, token: &SecretString) -> Result<AdminStats, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/admin/dashboard"))
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        read_json(response).await
    }

    /// Fetch the admin user table for the given criteria.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    #[instrument(skip(self, token, query))]
    pub async fn admin_users(
        &self,
        token: &SecretString,
        query: &UserListQuery,
    ) -> Result<Vec<UserProfile>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/admin/users"))
            .query(&query.query_pairs())
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        read_json(response).await
    }

    /// Fetch the admin store table for the given criteria.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    #[instrument(skip(self, token, query))]
    pub async fn admin_stores(
        &self,
        token: &SecretString,
        query: &AdminStoreListQuery,
    ) -> Result<Vec<AdminStoreRecord>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/admin/stores"))
            .query(&query.query_pairs())
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        read_json(response).await
    }

    // =========================================================================
    // Store endpoints
    // =========================================================================

    /// Fetch the browsable store list for the given criteria.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    #[instrument(skip(self, token, query))]
    pub async fn stores(
        &self,
        token: &SecretString,
        query: &StoreListQuery,
    ) -> Result<Vec<StoreRecord>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/stores"))
            .query(&query.query_pairs())
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        read_json(response).await
    }

    /// Submit a rating for a store.
    ///
    /// The response body is ignored; callers re-fetch the list so displayed
    /// aggregates come from the backend, not a local patch.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    #[instrument(skip(self, token), fields(store_id = %store_id, score = %score))]
    pub async fn submit_rating(
        &self,
        token: &SecretString,
        store_id: StoreId,
        score: Score,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(&format!("/stores/{store_id}/rating")))
            .bearer_auth(token.expose_secret())
            .json(&RateRequest { score })
            .send()
            .await?;

        read_unit(response).await
    }

    // =========================================================================
    // Owner endpoints
    // =========================================================================

    /// Fetch the owner's per-store rating report.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    #[instrument(skip(self, token))]
    pub async fn owner_dashboard(
        &self,
        token: &SecretString,
    ) -> Result<Vec<OwnerDashboardEntry>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/owner/dashboard"))
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        read_json(response).await
    }
}

/// Decode a 2xx response body, or fold a failure body into `ApiError`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: normalize_error(status, &body),
        })
    }
}

/// Check a body-ignored 2xx response, or fold a failure body into
/// `ApiError`.
async fn read_unit(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: normalize_error(status, &body),
        })
    }
}
