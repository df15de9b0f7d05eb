//! Repository for the `comments` table.

use gantry_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::CommentWithAuthor;

/// Columns for the comment/author join.
const JOINED_COLUMNS: &str = "c.id, c.site_log_id, c.user_id, c.content, c.created_at, \
                              p.full_name AS author_name, u.email AS author_email, \
                              p.role AS author_role";

/// Provides operations for site log comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment and return it joined with the author's profile.
    pub async fn create(
        pool: &PgPool,
        site_log_id: DbId,
        user_id: DbId,
        content: &str,
    ) -> Result<CommentWithAuthor, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO comments (site_log_id, user_id, content)
                VALUES ($1, $2, $3)
                RETURNING id, site_log_id, user_id, content, created_at
             )
             SELECT {JOINED_COLUMNS}
             FROM inserted c
             JOIN users u ON u.id = c.user_id
             JOIN user_profiles p ON p.user_id = c.user_id"
        );
        sqlx::query_as::<_, CommentWithAuthor>(&query)
            .bind(site_log_id)
            .bind(user_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// List a site log's comments oldest first, for chat-like rendering.
    pub async fn list_for_site_log(
        pool: &PgPool,
        site_log_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM comments c
             JOIN users u ON u.id = c.user_id
             JOIN user_profiles p ON p.user_id = c.user_id
             WHERE c.site_log_id = $1
             ORDER BY c.created_at ASC"
        );
        sqlx::query_as::<_, CommentWithAuthor>(&query)
            .bind(site_log_id)
            .fetch_all(pool)
            .await
    }
}
