//! Repository for the `site_logs` table.

use gantry_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::site_log::{CreateSiteLog, SiteLog};

const COLUMNS: &str =
    "id, project_id, supervisor_id, description, photo_url, metadata, created_at";

/// Provides CRUD operations for site logs.
pub struct SiteLogRepo;

impl SiteLogRepo {
    /// Insert a new site log, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSiteLog,
        supervisor_id: DbId,
    ) -> Result<SiteLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_logs (project_id, supervisor_id, description, photo_url, metadata)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteLog>(&query)
            .bind(input.project_id)
            .bind(supervisor_id)
            .bind(&input.description)
            .bind(&input.photo_url)
            .bind(input.metadata.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Find a site log by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SiteLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_logs WHERE id = $1");
        sqlx::query_as::<_, SiteLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's site logs, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<SiteLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM site_logs
             WHERE project_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SiteLog>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
