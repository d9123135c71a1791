//! CLI command implementations.

pub mod admin;
pub mod auth;
pub mod browse;
pub mod home;

use thiserror::Error;

use raterly_client::api::ApiError;
use raterly_client::auth::AuthError;
use raterly_client::{
    ApiClient, ClientConfig, ClientError, ConfigError, Session, SessionStore, SessionStoreError,
};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error from the client core, already carrying a displayable
    /// message.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The command needs a session and none is persisted.
    #[error("not logged in; run `raterly login` first")]
    NotLoggedIn,

    /// A command argument did not parse.
    #[error("invalid {what}: {message}")]
    InvalidArg {
        /// Which argument.
        what: &'static str,
        /// Why it was rejected.
        message: String,
    },
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Client(e.into())
    }
}

impl From<SessionStoreError> for CliError {
    fn from(e: SessionStoreError) -> Self {
        Self::Client(e.into())
    }
}

impl From<ApiError> for CliError {
    fn from(e: ApiError) -> Self {
        Self::Client(e.into())
    }
}

impl From<AuthError> for CliError {
    fn from(e: AuthError) -> Self {
        Self::Client(e.into())
    }
}

/// Everything a command needs: configuration, API client, session store.
pub struct Context {
    /// The API client bound to `RATERLY_API_URL`.
    pub api: ApiClient,
    /// The session store rooted in the configured data directory.
    pub sessions: SessionStore,
}

impl Context {
    /// Load configuration and open the session store.
    pub fn bootstrap() -> Result<Self, CliError> {
        let config = ClientConfig::from_env()?;
        let api = ApiClient::new(&config);
        let sessions = SessionStore::open(&config.data_dir)?;
        Ok(Self { api, sessions })
    }

    /// The current session, or a "not logged in" error.
    pub fn session(&self) -> Result<&Session, CliError> {
        self.sessions.current().ok_or(CliError::NotLoggedIn)
    }
}

/// Parse a CLI argument via `FromStr`, naming the argument in the error.
pub fn parse_arg<T>(what: &'static str, value: &str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| CliError::InvalidArg {
        what,
        message: e.to_string(),
    })
}

/// Render an optional average like `4.2` or `-` when absent.
pub fn fmt_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |value| format!("{value:.1}"))
}
