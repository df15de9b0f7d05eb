//! The four application roles.
//!
//! Stored in PostgreSQL as the `user_role` enum type (see the
//! `create_user_profiles` migration) and serialized lowercase on the wire.

use serde::{Deserialize, Serialize};

/// A user's role. Determines visible navigation and permitted actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Supervisor,
    Subcontractor,
    Client,
}

/// Every role, in privilege order (most to least).
pub const ALL_ROLES: [Role; 4] = [
    Role::Admin,
    Role::Supervisor,
    Role::Subcontractor,
    Role::Client,
];

/// The role assigned to newly signed-up profiles.
pub const DEFAULT_ROLE: Role = Role::Subcontractor;

impl Role {
    /// Lowercase wire/database name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Supervisor => "supervisor",
            Role::Subcontractor => "subcontractor",
            Role::Client => "client",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "supervisor" => Ok(Role::Supervisor),
            "subcontractor" => Ok(Role::Subcontractor),
            "client" => Ok(Role::Client),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in ALL_ROLES {
            assert_eq!(Role::from_str(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(Role::from_str("superuser").is_err());
        assert!(Role::from_str("Admin").is_err(), "role names are lowercase");
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Role::Subcontractor).unwrap();
        assert_eq!(json, "\"subcontractor\"");
        let role: Role = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(role, Role::Client);
    }
}
