//! Permit entity model and DTOs.

use chrono::NaiveDate;
use gantry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `permits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Permit {
    pub id: DbId,
    pub project_id: DbId,
    pub doc_name: String,
    pub expiry_date: NaiveDate,
    pub created_at: Timestamp,
}

/// Permit joined with its project's name, ordered by expiry for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PermitWithProject {
    pub id: DbId,
    pub project_id: DbId,
    pub doc_name: String,
    pub expiry_date: NaiveDate,
    pub created_at: Timestamp,
    pub project_name: String,
}

/// DTO for creating a permit.
#[derive(Debug, Deserialize)]
pub struct CreatePermit {
    pub project_id: DbId,
    pub doc_name: String,
    pub expiry_date: NaiveDate,
}
