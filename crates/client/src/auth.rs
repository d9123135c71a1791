//! Login, signup, and change-password flows.
//!
//! Each flow is one request/response/error cycle over the [`ApiClient`].
//! Success feeds the [`SessionStore`]; failure surfaces the normalized
//! backend message and leaves session state untouched. Flows are
//! re-entrant: nothing here blocks or debounces a second submission while
//! one is in flight.

use secrecy::SecretString;
use thiserror::Error;
use tracing::instrument;

use crate::api::{ApiClient, ApiError, SignupDetails, UserProfile};
use crate::session::{SessionStore, SessionStoreError};

/// Errors that can occur in an auth flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the request or it never completed; the display
    /// string is the normalized message.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend accepted the credentials but the session could not be
    /// persisted.
    #[error("failed to persist session: {0}")]
    Session(#[from] SessionStoreError),

    /// The flow requires an existing session and none is present.
    #[error("not logged in")]
    NotLoggedIn,
}

/// The three credentialed flows, bound to one API client.
#[derive(Debug, Clone)]
pub struct AuthFlow {
    api: ApiClient,
}

impl AuthFlow {
    /// Create the flows over an API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Log in and install the granted session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` with the normalized message on rejection;
    /// the session store is untouched in that case.
    #[instrument(skip(self, sessions, password), fields(email = %email))]
    pub async fn login(
        &self,
        sessions: &mut SessionStore,
        email: &str,
        password: &SecretString,
    ) -> Result<UserProfile, AuthError> {
        let grant = self.api.login(email, password).await?;
        sessions.login(grant.token, grant.user.clone())?;
        Ok(grant.user)
    }

    /// Register a new account and install the granted session.
    ///
    /// The backend returns a session immediately after signup, so success
    /// behaves identically to [`login`](Self::login). Format constraints
    /// on the submitted fields are advertised by [`rules`] but never
    /// enforced here; a violating submission goes to the backend and its
    /// rejection comes back normalized.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` with the normalized message on rejection;
    /// the session store is untouched in that case.
    #[instrument(skip(self, sessions, details), fields(email = %details.email))]
    pub async fn signup(
        &self,
        sessions: &mut SessionStore,
        details: &SignupDetails,
    ) -> Result<UserProfile, AuthError> {
        let grant = self.api.signup(details).await?;
        sessions.login(grant.token, grant.user.clone())?;
        Ok(grant.user)
    }

    /// Rotate the account password.
    ///
    /// Requires an existing session; never mutates the session store
    /// (password rotation does not invalidate the current token).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotLoggedIn` without a session, or
    /// `AuthError::Api` with the normalized message on rejection.
    #[instrument(skip_all)]
    pub async fn change_password(
        &self,
        sessions: &SessionStore,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), AuthError> {
        let session = sessions.current().ok_or(AuthError::NotLoggedIn)?;
        self.api
            .change_password(session.token(), old_password, new_password)
            .await?;
        Ok(())
    }
}

/// Advertised signup format constraints.
///
/// These rules exist for display and optional pre-checks; the client
/// never blocks a submission on them. The backend stays authoritative,
/// and its rejections flow back through the error normalizer.
pub mod rules {
    /// Minimum display-name length.
    pub const NAME_MIN: usize = 20;
    /// Maximum display-name length.
    pub const NAME_MAX: usize = 60;
    /// Maximum address length.
    pub const ADDRESS_MAX: usize = 400;
    /// Minimum password length.
    pub const PASSWORD_MIN: usize = 8;
    /// Maximum password length.
    pub const PASSWORD_MAX: usize = 16;

    /// Advisory check of the display name.
    #[must_use]
    pub fn name_advisory(name: &str) -> Option<String> {
        let count = name.chars().count();
        (count < NAME_MIN || count > NAME_MAX)
            .then(|| format!("name should be {NAME_MIN}-{NAME_MAX} characters"))
    }

    /// Advisory check of the address.
    #[must_use]
    pub fn address_advisory(address: &str) -> Option<String> {
        (address.chars().count() > ADDRESS_MAX)
            .then(|| format!("address should be at most {ADDRESS_MAX} characters"))
    }

    /// Advisory checks of the password. Returns one message per unmet
    /// requirement.
    #[must_use]
    pub fn password_advisories(password: &str) -> Vec<String> {
        let mut advisories = Vec::new();

        let count = password.chars().count();
        if count < PASSWORD_MIN || count > PASSWORD_MAX {
            advisories.push(format!(
                "password should be {PASSWORD_MIN}-{PASSWORD_MAX} characters"
            ));
        }
        if !password.chars().any(char::is_uppercase) {
            advisories.push("password should contain an uppercase letter".to_string());
        }
        if !password.chars().any(|c| !c.is_alphanumeric()) {
            advisories.push("password should contain a special character".to_string());
        }

        advisories
    }

    /// All advisories for a signup form, in field order.
    #[must_use]
    pub fn signup_advisories(name: &str, address: &str, password: &str) -> Vec<String> {
        let mut advisories = Vec::new();
        advisories.extend(name_advisory(name));
        advisories.extend(address_advisory(address));
        advisories.extend(password_advisories(password));
        advisories
    }
}

#[cfg(test)]
mod tests {
    use super::rules;

    #[test]
    fn test_conforming_signup_has_no_advisories() {
        let advisories =
            rules::signup_advisories("Ada Lovelace of Example Street", "1 Example Way", "Valid#Pass1");
        assert!(advisories.is_empty(), "{advisories:?}");
    }

    #[test]
    fn test_short_name_advisory() {
        assert!(rules::name_advisory("Ada").is_some());
        assert!(rules::name_advisory(&"a".repeat(61)).is_some());
        assert!(rules::name_advisory(&"a".repeat(20)).is_none());
    }

    #[test]
    fn test_address_advisory_only_when_too_long() {
        assert!(rules::address_advisory("").is_none());
        assert!(rules::address_advisory(&"a".repeat(400)).is_none());
        assert!(rules::address_advisory(&"a".repeat(401)).is_some());
    }

    #[test]
    fn test_password_advisories_name_each_unmet_rule() {
        let advisories = rules::password_advisories("short");
        assert_eq!(advisories.len(), 3);

        let advisories = rules::password_advisories("longenough1#");
        assert_eq!(
            advisories,
            vec!["password should contain an uppercase letter".to_string()]
        );

        let advisories = rules::password_advisories("Longenough1");
        assert_eq!(
            advisories,
            vec!["password should contain a special character".to_string()]
        );
    }

    #[test]
    fn test_conforming_password_has_no_advisories() {
        assert!(rules::password_advisories("Valid#Pass1").is_empty());
    }
}
