//! Durable authentication session state.
//!
//! A session pairs the backend-issued bearer token with the profile it
//! authorizes. The pairing is structural: [`Session`] has no optional
//! fields, and the store holds `Option<Session>`, so token-without-user
//! (or the reverse) cannot be represented in memory.
//!
//! On disk the session lives under two fixed keys in the store's
//! directory: the token as plain text and the profile as JSON. Every
//! `login`/`logout` is written through before returning, so a crash
//! between a login and the next launch never loses or corrupts session
//! state. Restoring a half-present pair (one key missing or unreadable)
//! yields a logged-out store and removes the orphan entry.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::UserProfile;

/// Fixed storage keys for persisted session data.
pub mod keys {
    /// Key for the bearer token, stored as plain text.
    pub const AUTH_TOKEN: &str = "auth_token";

    /// Key for the user profile, stored as JSON.
    pub const AUTH_USER: &str = "auth_user.json";
}

/// Errors that can occur while persisting or clearing session state.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Reading or writing the backing files failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the profile as JSON failed.
    #[error("failed to encode session profile: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An authenticated session: the bearer token and the profile it
/// authorizes, always together.
#[derive(Clone)]
pub struct Session {
    token: SecretString,
    user: UserProfile,
}

impl Session {
    /// The bearer token.
    #[must_use]
    pub const fn token(&self) -> &SecretString {
        &self.token
    }

    /// The profile the token authorizes.
    #[must_use]
    pub const fn user(&self) -> &UserProfile {
        &self.user
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// Owner of the current session and its persistence.
///
/// Constructed from an explicit directory and passed by reference to the
/// components that need it; the store never reaches for global state and
/// performs no network calls.
#[derive(Debug)]
pub struct SessionStore {
    dir: PathBuf,
    current: Option<Session>,
}

impl SessionStore {
    /// Open the store, restoring a previously persisted session if one is
    /// present and intact.
    ///
    /// This is the sole source of "am I logged in" at startup.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Io` if the directory cannot be created
    /// or the backing files cannot be read (other than being absent).
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let token = read_optional(&dir.join(keys::AUTH_TOKEN))?;
        let user = read_optional(&dir.join(keys::AUTH_USER))?;

        let current = match (token, user) {
            (Some(token), Some(user_json)) => match serde_json::from_str(&user_json) {
                Ok(user) => {
                    debug!("Restored persisted session");
                    Some(Session {
                        token: SecretString::from(token),
                        user,
                    })
                }
                Err(e) => {
                    warn!("Persisted session profile unreadable, clearing: {e}");
                    remove_entries(&dir)?;
                    None
                }
            },
            (None, None) => None,
            // Half-present pair: repair the invariant rather than guessing.
            _ => {
                warn!("Persisted session was half-present, clearing");
                remove_entries(&dir)?;
                None
            }
        };

        Ok(Self { dir, current })
    }

    /// The current session, if logged in.
    #[must_use]
    pub const fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Whether a session is present.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Set both session fields atomically and persist them immediately.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if either entry cannot be written; the
    /// in-memory session is only installed after both writes succeed.
    pub fn login(&mut self, token: SecretString, user: UserProfile) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(keys::AUTH_TOKEN), token.expose_secret())?;
        fs::write(
            self.dir.join(keys::AUTH_USER),
            serde_json::to_string(&user)?,
        )?;

        debug!(user_id = %user.id, role = %user.role, "Session persisted");
        self.current = Some(Session { token, user });
        Ok(())
    }

    /// Clear both session fields and delete persisted state.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::Io` if a persisted entry exists but
    /// cannot be removed.
    pub fn logout(&mut self) -> Result<(), SessionStoreError> {
        remove_entries(&self.dir)?;
        self.current = None;
        debug!("Session cleared");
        Ok(())
    }
}

/// Read a file to a string, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>, SessionStoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Remove both persisted entries, ignoring ones that are already gone.
fn remove_entries(dir: &Path) -> Result<(), SessionStoreError> {
    for key in [keys::AUTH_TOKEN, keys::AUTH_USER] {
        match fs::remove_file(dir.join(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
