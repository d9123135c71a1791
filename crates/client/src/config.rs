//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `RATERLY_API_URL` - Base URL of the Raterly backend (http or https)
//!
//! ## Optional
//! - `RATERLY_DATA_DIR` - Directory for durable client state (default:
//!   the per-user data directory for "raterly")
//! - `RATERLY_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use thiserror::Error;
use url::Url;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Could not determine a data directory; set RATERLY_DATA_DIR")]
    NoDataDir,
}

/// Raterly client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Raterly backend.
    pub api_url: Url,
    /// Directory holding durable client state (the persisted session).
    pub data_dir: PathBuf,
    /// Timeout applied to every backend request.
    pub http_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `RATERLY_API_URL` is missing or invalid, if
    /// `RATERLY_HTTP_TIMEOUT_SECS` is set but not a number, or if no data
    /// directory could be resolved.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_api_url(&get_required_env("RATERLY_API_URL")?)?;

        let data_dir = match get_optional_env("RATERLY_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir().ok_or(ConfigError::NoDataDir)?,
        };

        let http_timeout = parse_timeout_secs(get_optional_env("RATERLY_HTTP_TIMEOUT_SECS"))?;

        Ok(Self {
            api_url,
            data_dir,
            http_timeout,
        })
    }
}

/// Per-user data directory for the client.
fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "Raterly", "raterly").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Parse and validate the backend base URL.
fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("RATERLY_API_URL".to_string(), e.to_string()))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            "RATERLY_API_URL".to_string(),
            format!("unsupported scheme: {}", parsed.scheme()),
        ));
    }

    Ok(parsed)
}

/// Parse the optional request timeout, falling back to the default.
fn parse_timeout_secs(value: Option<String>) -> Result<Duration, ConfigError> {
    let secs = match value {
        Some(raw) => raw.parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar("RATERLY_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?,
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_url_valid() {
        let url = parse_api_url("https://api.raterly.dev").unwrap();
        assert_eq!(url.scheme(), "https");

        let url = parse_api_url("http://localhost:8000").unwrap();
        assert_eq!(url.port(), Some(8000));
    }

    #[test]
    fn test_parse_api_url_rejects_non_http() {
        let result = parse_api_url("ftp://api.raterly.dev");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_api_url_rejects_garbage() {
        assert!(parse_api_url("not a url").is_err());
    }

    #[test]
    fn test_parse_timeout_default() {
        let timeout = parse_timeout_secs(None).unwrap();
        assert_eq!(timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
    }

    #[test]
    fn test_parse_timeout_explicit() {
        let timeout = parse_timeout_secs(Some("5".to_string())).unwrap();
        assert_eq!(timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_timeout_invalid() {
        let result = parse_timeout_secs(Some("soon".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
