//! Account roles.

use serde::{Deserialize, Serialize};

/// Account role issued by the backend at login/signup.
///
/// The role embedded in a session decides which top-level view the client
/// presents and which backend endpoints it calls. The client performs no
/// authorization checks of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator: sees the admin overview and tables.
    Admin,
    /// Regular account: browses and rates stores.
    User,
    /// Store owner: sees the per-store rating report.
    Owner,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
            Self::Owner => write!(f, "owner"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "owner" => Ok(Self::Owner),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Owner.to_string(), "owner");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
