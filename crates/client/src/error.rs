//! Unified error type for binary consumers of the client core.
//!
//! The library modules each carry their own error enum; this type folds
//! them together so a front-end can hold one `Result` chain. Per-failure
//! display strings already come normalized out of the lower layers.

use thiserror::Error;

use crate::api::ApiError;
use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::session::SessionStoreError;

/// Client-level error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration loading failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session persistence failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionStoreError),

    /// A backend request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An auth flow failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Result type alias for `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_passes_through_normalized_api_message() {
        let err = ClientError::Api(ApiError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            message: "Invalid credentials".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_display_wraps_config_errors() {
        let err = ClientError::Config(ConfigError::MissingEnvVar("RATERLY_API_URL".to_string()));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing environment variable: RATERLY_API_URL"
        );
    }
}
