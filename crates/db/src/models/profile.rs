//! User profile model: the application-owned record extending an identity
//! with a role and display name.

use gantry_core::roles::Role;
use gantry_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub role: Role,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile at signup.
pub struct CreateProfile {
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub role: Role,
}
