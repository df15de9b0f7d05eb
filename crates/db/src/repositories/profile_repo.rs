//! Repository for the `user_profiles` table.

use gantry_core::roles::Role;
use gantry_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, UserProfile};

const COLUMNS: &str = "id, user_id, full_name, role, created_at, updated_at";

/// Provides CRUD operations for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile for a freshly created identity.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (user_id, full_name, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(input.user_id)
            .bind(&input.full_name)
            .bind(input.role)
            .fetch_one(pool)
            .await
    }

    /// Find the profile belonging to an identity.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Look up just the role for an identity. `None` when no profile exists.
    pub async fn find_role(pool: &PgPool, user_id: DbId) -> Result<Option<Role>, sqlx::Error> {
        sqlx::query_scalar::<_, Role>("SELECT role FROM user_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Reassign an identity's role. Returns the updated profile, or `None`
    /// if the identity has no profile.
    pub async fn update_role(
        pool: &PgPool,
        user_id: DbId,
        role: Role,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET role = $2, updated_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    /// Ids of all active identities holding `role`. Used for fan-out
    /// notifications (e.g. new claim submissions go to every admin).
    pub async fn user_ids_with_role(pool: &PgPool, role: Role) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT p.user_id
             FROM user_profiles p
             JOIN users u ON u.id = p.user_id
             WHERE p.role = $1 AND u.is_active",
        )
        .bind(role)
        .fetch_all(pool)
        .await
    }
}
