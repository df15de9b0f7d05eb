//! Handlers for the `/site-logs` resource, including per-log comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gantry_core::error::CoreError;
use gantry_core::permissions::{
    PERM_CREATE_SITE_LOGS, PERM_READ_ALL, PERM_READ_OWN_LOGS, PERM_VIEW_LOGS,
};
use gantry_core::types::DbId;
use gantry_db::models::comment::CommentWithAuthor;
use gantry_db::models::notification::{CreateNotification, NotificationType};
use gantry_db::models::site_log::{CreateSiteLog, SiteLog};
use gantry_db::repositories::{CommentRepo, NotificationRepo, ProjectRepo, SiteLogRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{authorize, authorize_any};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /site-logs`.
#[derive(Debug, Deserialize)]
pub struct SiteLogListParams {
    pub project_id: DbId,
}

/// Request body for `POST /site-logs/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/site-logs
///
/// Record a daily site log. The reporting supervisor comes from the
/// session. Capture metadata (GPS fix, device) rides along as JSON when the
/// field client provides it.
pub async fn create_site_log(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateSiteLog>,
) -> AppResult<(StatusCode, Json<SiteLog>)> {
    authorize(&user, PERM_CREATE_SITE_LOGS)?;

    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Site log description must not be empty".into(),
        )));
    }

    // Reject logs against projects that do not exist with a 404 rather
    // than surfacing the FK violation.
    let project = ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: input.project_id,
            })
        })?;

    let log = SiteLogRepo::create(&state.pool, &input, user.user_id).await?;
    tracing::info!(
        site_log_id = log.id,
        project_id = log.project_id,
        supervisor_id = user.user_id,
        "site log created"
    );

    // Broadcast notification so the activity feed picks the log up.
    let notification = CreateNotification {
        user_id: None,
        kind: NotificationType::SiteLog,
        title: format!("New site log for {}", project.name),
        message: Some(log.description.clone()),
        link: Some(format!("/projects/{}", project.id)),
    };
    if let Err(e) = NotificationRepo::create(&state.pool, &notification).await {
        tracing::warn!(site_log_id = log.id, error = %e, "failed to create notification");
    }

    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/v1/site-logs?project_id=
pub async fn list_site_logs(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<SiteLogListParams>,
) -> AppResult<Json<Vec<SiteLog>>> {
    require_log_read(&user)?;
    let logs = SiteLogRepo::list_for_project(&state.pool, params.project_id).await?;
    Ok(Json(logs))
}

/// GET /api/v1/site-logs/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CommentWithAuthor>>> {
    require_log_read(&user)?;
    ensure_log_exists(&state, id).await?;
    let comments = CommentRepo::list_for_site_log(&state.pool, id).await?;
    Ok(Json(comments))
}

/// POST /api/v1/site-logs/{id}/comments
///
/// Any user who can read a log can discuss it.
pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentWithAuthor>)> {
    require_log_read(&user)?;

    if input.content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment must not be empty".into(),
        )));
    }

    ensure_log_exists(&state, id).await?;
    let comment = CommentRepo::create(&state.pool, id, user.user_id, &input.content).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Site logs are readable by full readers, their authors, and clients
/// following progress.
fn require_log_read(user: &AuthUser) -> Result<(), AppError> {
    authorize_any(user, &[PERM_READ_ALL, PERM_READ_OWN_LOGS, PERM_VIEW_LOGS])
}

async fn ensure_log_exists(state: &AppState, id: DbId) -> Result<(), AppError> {
    SiteLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Site log",
            id,
        }))?;
    Ok(())
}
