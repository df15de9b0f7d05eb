//! Handlers for the `/notifications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gantry_core::error::CoreError;
use gantry_core::types::DbId;
use gantry_db::models::notification::Notification;
use gantry_db::repositories::NotificationRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Default page size for the notification list.
const DEFAULT_LIMIT: i64 = 50;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    #[serde(default)]
    pub unread_only: bool,
}

/// Response body for `GET /notifications/unread-count`.
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// GET /api/v1/notifications?unread_only=&limit=&offset=
///
/// The user's own notifications plus broadcasts, newest first.
pub async fn list_notifications(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<NotificationListParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<Notification>>> {
    let limit = page.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, 200);
    let offset = page.offset.unwrap_or(0).max(0);

    let notifications = NotificationRepo::list_for_user(
        &state.pool,
        user.user_id,
        params.unread_only,
        limit,
        offset,
    )
    .await?;
    Ok(Json(notifications))
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<UnreadCountResponse>> {
    let count = NotificationRepo::unread_count(&state.pool, user.user_id).await?;
    Ok(Json(UnreadCountResponse { count }))
}

/// POST /api/v1/notifications/{id}/read
///
/// Marking is scoped to the caller: another user's notification comes back
/// as 404, not as someone else's state change.
pub async fn mark_read(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let marked = NotificationRepo::mark_read(&state.pool, id, user.user_id).await?;
    if !marked {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<StatusCode> {
    let marked = NotificationRepo::mark_all_read(&state.pool, user.user_id).await?;
    tracing::debug!(user_id = user.user_id, marked, "marked notifications read");
    Ok(StatusCode::NO_CONTENT)
}
