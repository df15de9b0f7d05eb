//! Handlers for the `/admin` resource (user and role management).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gantry_core::error::CoreError;
use gantry_core::roles::Role;
use gantry_core::types::DbId;
use gantry_db::models::user::UserRecord;
use gantry_db::repositories::{ProfileRepo, SessionRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserRecord>>> {
    let users = UserRepo::list_records(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserRecord>> {
    let user = UserRepo::find_record(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// PUT /api/v1/admin/users/{id}/role
///
/// Reassign a user's role. Live sessions are revoked so the change takes
/// effect at the next login instead of whenever the old token expires.
pub async fn update_user_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoleRequest>,
) -> AppResult<Json<UserRecord>> {
    if admin.user_id == id && input.role != Role::Admin {
        return Err(AppError::Core(CoreError::Validation(
            "Admins cannot demote themselves".into(),
        )));
    }

    ProfileRepo::update_role(&state.pool, id, input.role)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    let record = UserRepo::find_record(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(
        user_id = id,
        role = %input.role,
        changed_by = admin.user_id,
        "user role updated"
    );
    Ok(Json(record))
}

/// POST /api/v1/admin/users/{id}/deactivate
///
/// Deactivate an account and revoke its sessions. Historical records
/// (site logs, claims) keep pointing at the user.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if admin.user_id == id {
        return Err(AppError::Core(CoreError::Validation(
            "Admins cannot deactivate themselves".into(),
        )));
    }

    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    tracing::info!(user_id = id, deactivated_by = admin.user_id, "user deactivated");
    Ok(StatusCode::NO_CONTENT)
}
