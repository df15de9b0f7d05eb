//! Financial claim entity model and DTOs.

use gantry_core::claims::ClaimStatus;
use gantry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `claims` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Claim {
    pub id: DbId,
    pub project_id: DbId,
    pub amount: f64,
    pub description: String,
    pub status: ClaimStatus,
    pub proof_url: Option<String>,
    pub submitted_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Claim joined with its project's name for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClaimWithProject {
    pub id: DbId,
    pub project_id: DbId,
    pub amount: f64,
    pub description: String,
    pub status: ClaimStatus,
    pub proof_url: Option<String>,
    pub submitted_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project_name: String,
}

/// DTO for submitting a claim. `submitted_by` comes from the session, not
/// the request body.
#[derive(Debug, Deserialize)]
pub struct CreateClaim {
    pub project_id: DbId,
    pub amount: f64,
    pub description: String,
    pub proof_url: Option<String>,
}

/// Per-status claim totals for the financial summary.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct FinancialSummary {
    pub paid: f64,
    pub pending: f64,
    pub approved: f64,
}
