//! User identity model and DTOs.

use gantry_core::roles::Role;
use gantry_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full identity row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserRecord`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new identity row.
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

/// Identity joined with its profile, safe for API responses.
///
/// The profile side of the join is optional: an identity whose profile
/// row is missing still has a valid session, just with no role and no
/// name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRecord {
    pub id: DbId,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
