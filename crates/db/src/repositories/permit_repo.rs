//! Repository for the `permits` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::permit::{CreatePermit, Permit, PermitWithProject};

const COLUMNS: &str = "id, project_id, doc_name, expiry_date, created_at";

const JOINED_COLUMNS: &str = "pe.id, pe.project_id, pe.doc_name, pe.expiry_date, \
                              pe.created_at, pr.name AS project_name";

/// Provides CRUD operations for permits.
pub struct PermitRepo;

impl PermitRepo {
    /// Insert a new permit, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePermit) -> Result<Permit, sqlx::Error> {
        let query = format!(
            "INSERT INTO permits (project_id, doc_name, expiry_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Permit>(&query)
            .bind(input.project_id)
            .bind(&input.doc_name)
            .bind(input.expiry_date)
            .fetch_one(pool)
            .await
    }

    /// List all permits with their project names, soonest expiry first.
    pub async fn list_with_project(pool: &PgPool) -> Result<Vec<PermitWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM permits pe
             JOIN projects pr ON pr.id = pe.project_id
             ORDER BY pe.expiry_date ASC"
        );
        sqlx::query_as::<_, PermitWithProject>(&query)
            .fetch_all(pool)
            .await
    }

    /// Permits expiring on or before `cutoff`, soonest first. Past-due
    /// permits are included so the risk list surfaces them too.
    pub async fn list_expiring_by(
        pool: &PgPool,
        cutoff: NaiveDate,
    ) -> Result<Vec<PermitWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM permits pe
             JOIN projects pr ON pr.id = pe.project_id
             WHERE pe.expiry_date <= $1
             ORDER BY pe.expiry_date ASC"
        );
        sqlx::query_as::<_, PermitWithProject>(&query)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// Count permits already expired or expiring on or before `cutoff`.
    pub async fn count_at_risk(pool: &PgPool, cutoff: NaiveDate) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM permits WHERE expiry_date <= $1")
            .bind(cutoff)
            .fetch_one(pool)
            .await
    }
}
