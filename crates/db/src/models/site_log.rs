//! Site log entity model and DTOs.

use gantry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Optional capture metadata attached to a site log photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteLogMetadata {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: Option<String>,
    pub device: Option<String>,
}

/// A row from the `site_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteLog {
    pub id: DbId,
    pub project_id: DbId,
    pub supervisor_id: Option<DbId>,
    pub description: String,
    pub photo_url: Option<String>,
    pub metadata: Option<Json<SiteLogMetadata>>,
    pub created_at: Timestamp,
}

/// DTO for creating a site log. `supervisor_id` comes from the session.
#[derive(Debug, Deserialize)]
pub struct CreateSiteLog {
    pub project_id: DbId,
    pub description: String,
    pub photo_url: Option<String>,
    pub metadata: Option<SiteLogMetadata>,
}
