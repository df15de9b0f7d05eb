//! Notification entity model and DTOs.

use gantry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// What triggered a notification. Stored as the PostgreSQL
/// `notification_type` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
pub enum NotificationType {
    SiteLog,
    PermitExpiry,
    ClaimUpdate,
}

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: Option<DbId>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: Option<String>,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a notification.
pub struct CreateNotification {
    pub user_id: Option<DbId>,
    pub kind: NotificationType,
    pub title: String,
    pub message: Option<String>,
    pub link: Option<String>,
}
