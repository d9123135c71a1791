//! Request and response types for the Raterly backend contract.

use raterly_core::{Email, Role, Score, StoreId, UserId};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Profile of the account a session belongs to.
///
/// Immutable for the session's lifetime: besides the password (which is not
/// part of the profile), nothing here can be edited client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: Email,
    /// Postal address.
    pub address: String,
    /// Role issued by the backend; decides the active view.
    pub role: Role,
}

/// Successful login/signup: the backend issues a token and the profile it
/// authorizes, together.
#[derive(Debug)]
pub struct AuthGrant {
    /// Opaque bearer token.
    pub token: SecretString,
    /// Profile the token authorizes.
    pub user: UserProfile,
}

/// Raw wire form of a successful auth response.
#[derive(Deserialize)]
pub(super) struct AuthResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Store record as seen by a regular user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreRecord {
    /// Store ID.
    pub id: StoreId,
    /// Store name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Store address.
    pub address: String,
    /// Average rating across all users, absent when unrated.
    #[serde(default)]
    pub overall_rating: Option<f64>,
    /// The requesting user's own rating, absent when they have not rated.
    #[serde(default)]
    pub my_rating: Option<Score>,
    /// Number of ratings submitted for this store.
    pub rating_count: u64,
}

/// Store record in the admin table projection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminStoreRecord {
    /// Store ID.
    pub id: StoreId,
    /// Store name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Store address.
    pub address: String,
    /// Average rating across all users, absent when unrated.
    #[serde(default)]
    pub average_rating: Option<f64>,
    /// Number of ratings submitted for this store.
    pub rating_count: u64,
}

/// Point-in-time platform totals, fetched once per admin view entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AdminStats {
    /// Registered accounts.
    pub total_users: u64,
    /// Registered stores.
    pub total_stores: u64,
    /// Submitted ratings.
    pub total_ratings: u64,
}

/// Minimal store reference inside an owner dashboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreRef {
    /// Store ID.
    pub id: StoreId,
    /// Store name.
    pub name: String,
}

/// One rating as reported to the store's owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatingEntry {
    /// Name of the rating user.
    pub user_name: String,
    /// Email of the rating user.
    pub user_email: String,
    /// Submitted score.
    pub score: Score,
}

/// One store in the owner's rating report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnerDashboardEntry {
    /// The owned store.
    pub store: StoreRef,
    /// Average rating, absent when unrated.
    #[serde(default)]
    pub average_rating: Option<f64>,
    /// Every rating submitted for this store.
    pub ratings: Vec<RatingEntry>,
}

/// Signup form contents.
///
/// Free-form by design: format constraints are advertised by
/// [`crate::auth::rules`] but enforced by the backend only.
#[derive(Debug, Clone)]
pub struct SignupDetails {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Chosen password.
    pub password: SecretString,
}

// Request bodies are private to the API client.

#[derive(Serialize)]
pub(super) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(super) struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub address: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(super) struct ChangePasswordRequest<'a> {
    pub old_password: &'a str,
    pub new_password: &'a str,
}

#[derive(Serialize)]
pub(super) struct RateRequest {
    pub score: Score,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_store_record_deserializes_absent_ratings() {
        let json = r#"{
            "id": 3,
            "name": "Corner Books",
            "email": "hello@cornerbooks.example",
            "address": "12 Hill Road",
            "rating_count": 0
        }"#;

        let record: StoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, StoreId::new(3));
        assert!(record.overall_rating.is_none());
        assert!(record.my_rating.is_none());
        assert_eq!(record.rating_count, 0);
    }

    #[test]
    fn test_store_record_deserializes_ratings() {
        let json = r#"{
            "id": 3,
            "name": "Corner Books",
            "email": "hello@cornerbooks.example",
            "address": "12 Hill Road",
            "overall_rating": 4.2,
            "my_rating": 4,
            "rating_count": 11
        }"#;

        let record: StoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.overall_rating, Some(4.2));
        assert_eq!(record.my_rating, Some(Score::new(4).unwrap()));
    }

    #[test]
    fn test_owner_dashboard_entry_deserializes() {
        let json = r#"{
            "store": {"id": 9, "name": "Corner Books"},
            "average_rating": 3.5,
            "ratings": [
                {"user_name": "Ada", "user_email": "ada@example.com", "score": 4},
                {"user_name": "Brin", "user_email": "brin@example.com", "score": 3}
            ]
        }"#;

        let entry: OwnerDashboardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.store.id, StoreId::new(9));
        assert_eq!(entry.ratings.len(), 2);
        let first = entry.ratings.first().unwrap();
        assert_eq!(first.score, Score::new(4).unwrap());
    }

    #[test]
    fn test_user_profile_deserializes_role() {
        let json = r#"{
            "id": 1,
            "name": "Site Administrator Account",
            "email": "admin@raterly.dev",
            "address": "1 Platform Way",
            "role": "admin"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, Role::Admin);
    }

    #[test]
    fn test_rate_request_serializes_score_field() {
        let body = serde_json::to_string(&RateRequest {
            score: Score::new(5).unwrap(),
        })
        .unwrap();
        assert_eq!(body, r#"{"score":5}"#);
    }
}
