//! Project status and progress rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Project status. Stored as the PostgreSQL `project_status` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
}

/// Validate a progress percentage coming from a client.
pub fn validate_progress(percent: i32) -> Result<(), CoreError> {
    if !(0..=100).contains(&percent) {
        return Err(CoreError::Validation(format!(
            "progress_percent must be between 0 and 100, got {percent}"
        )));
    }
    Ok(())
}
