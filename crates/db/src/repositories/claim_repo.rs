//! Repository for the `claims` table.

use gantry_core::claims::ClaimStatus;
use gantry_core::types::DbId;
use sqlx::PgPool;

use crate::models::claim::{Claim, ClaimWithProject, CreateClaim, FinancialSummary};

const COLUMNS: &str = "id, project_id, amount, description, status, proof_url, \
                       submitted_by, approved_by, created_at, updated_at";

const JOINED_COLUMNS: &str = "c.id, c.project_id, c.amount, c.description, c.status, \
                              c.proof_url, c.submitted_by, c.approved_by, c.created_at, \
                              c.updated_at, p.name AS project_name";

/// Provides CRUD operations for financial claims.
pub struct ClaimRepo;

impl ClaimRepo {
    /// Insert a new claim in `pending` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClaim,
        submitted_by: DbId,
    ) -> Result<Claim, sqlx::Error> {
        let query = format!(
            "INSERT INTO claims (project_id, amount, description, proof_url, submitted_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(input.project_id)
            .bind(input.amount)
            .bind(&input.description)
            .bind(&input.proof_url)
            .bind(submitted_by)
            .fetch_one(pool)
            .await
    }

    /// Find a claim by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Claim>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM claims WHERE id = $1");
        sqlx::query_as::<_, Claim>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List claims with project names, newest first, optionally filtered
    /// to a single project.
    pub async fn list_with_project(
        pool: &PgPool,
        project_id: Option<DbId>,
    ) -> Result<Vec<ClaimWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM claims c
             JOIN projects p ON p.id = c.project_id
             WHERE $1::BIGINT IS NULL OR c.project_id = $1
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, ClaimWithProject>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List the claims a given user submitted, newest first.
    pub async fn list_for_submitter(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ClaimWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM claims c
             JOIN projects p ON p.id = c.project_id
             WHERE c.submitted_by = $1
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, ClaimWithProject>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Move a claim from `expected` to `status`, stamping the approver.
    ///
    /// The `status = $3` guard makes the transition check effective under
    /// concurrency: a row updated by a racing writer no longer matches and
    /// the call returns `None`, leaving the stored status unchanged.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        expected: ClaimStatus,
        status: ClaimStatus,
        approved_by: DbId,
    ) -> Result<Option<Claim>, sqlx::Error> {
        let query = format!(
            "UPDATE claims SET status = $2, approved_by = $4, updated_at = NOW()
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(id)
            .bind(status)
            .bind(expected)
            .bind(approved_by)
            .fetch_optional(pool)
            .await
    }

    /// Sum claim amounts per status in a single aggregate query.
    pub async fn financial_summary(pool: &PgPool) -> Result<FinancialSummary, sqlx::Error> {
        sqlx::query_as::<_, FinancialSummary>(
            "SELECT
                COALESCE(SUM(amount) FILTER (WHERE status = 'paid'), 0) AS paid,
                COALESCE(SUM(amount) FILTER (WHERE status = 'pending'), 0) AS pending,
                COALESCE(SUM(amount) FILTER (WHERE status = 'approved'), 0) AS approved
             FROM claims",
        )
        .fetch_one(pool)
        .await
    }
}
