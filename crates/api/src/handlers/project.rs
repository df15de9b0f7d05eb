//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gantry_core::error::CoreError;
use gantry_core::permissions::{
    PERM_DELETE_RECORDS, PERM_READ_ALL, PERM_VIEW_ASSIGNED_PROJECTS, PERM_VIEW_PROJECTS,
    PERM_WRITE_ALL,
};
use gantry_core::projects::validate_progress;
use gantry_core::types::DbId;
use gantry_db::models::project::{CreateProject, Project, UpdateProject};
use gantry_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{authorize, authorize_any};
use crate::state::AppState;

/// Permissions that grant read access to the project list.
const PROJECT_READ: &[&str] = &[PERM_READ_ALL, PERM_VIEW_PROJECTS, PERM_VIEW_ASSIGNED_PROJECTS];

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    authorize_any(&user, PROJECT_READ)?;
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    authorize_any(&user, PROJECT_READ)?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id,
            })
        })?;
    Ok(Json(project))
}

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    authorize(&user, PERM_WRITE_ALL)?;

    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name must not be empty".into(),
        )));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, name = %project.name, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    authorize(&user, PERM_WRITE_ALL)?;

    if let Some(percent) = input.progress_percent {
        validate_progress(percent)?;
    }
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Project name must not be empty".into(),
            )));
        }
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id,
            })
        })?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    authorize(&user, PERM_DELETE_RECORDS)?;

    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    tracing::info!(project_id = id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}
