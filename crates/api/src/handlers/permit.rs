//! Handlers for the `/permits` resource.
//!
//! Permit listings carry a computed risk tier so the compliance view can
//! sort and badge documents without re-deriving expiry math client-side.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gantry_core::error::CoreError;
use gantry_core::permissions::{PERM_READ_ALL, PERM_VIEW_PERMITS, PERM_WRITE_ALL};
use gantry_core::permits::{permit_risk, PermitRisk, EXPIRY_WARNING_DAYS};
use gantry_core::types::DbId;
use gantry_db::models::permit::{CreatePermit, Permit, PermitWithProject};
use gantry_db::repositories::PermitRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{authorize, authorize_any};
use crate::state::AppState;

/// Permissions that grant read access to permits.
const PERMIT_READ: &[&str] = &[PERM_READ_ALL, PERM_VIEW_PERMITS];

/// A permit joined with its project and annotated with the risk tier for
/// today's date.
#[derive(Debug, Serialize)]
pub struct PermitView {
    pub id: DbId,
    pub project_id: DbId,
    pub project_name: String,
    pub doc_name: String,
    pub expiry_date: chrono::NaiveDate,
    pub risk: PermitRisk,
    /// Days until expiry; negative once expired.
    pub days_remaining: i64,
}

impl PermitView {
    /// Annotate a joined permit row with its risk tier for `today`.
    pub fn annotate(p: PermitWithProject, today: chrono::NaiveDate) -> Self {
        PermitView {
            risk: permit_risk(p.expiry_date, today),
            days_remaining: (p.expiry_date - today).num_days(),
            id: p.id,
            project_id: p.project_id,
            project_name: p.project_name,
            doc_name: p.doc_name,
            expiry_date: p.expiry_date,
        }
    }
}

/// GET /api/v1/permits
///
/// All permits, soonest expiry first, each tagged with its risk tier.
pub async fn list_permits(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<PermitView>>> {
    authorize_any(&user, PERMIT_READ)?;

    let today = Utc::now().date_naive();
    let permits = PermitRepo::list_with_project(&state.pool).await?;

    let views = permits
        .into_iter()
        .map(|p| PermitView::annotate(p, today))
        .collect();

    Ok(Json(views))
}

/// GET /api/v1/permits/expiring
///
/// Permits inside the expiry warning window (or already expired).
pub async fn list_expiring_permits(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<PermitView>>> {
    authorize_any(&user, PERMIT_READ)?;

    let today = Utc::now().date_naive();
    let cutoff = today + chrono::Duration::days(EXPIRY_WARNING_DAYS);
    let permits = PermitRepo::list_expiring_by(&state.pool, cutoff).await?;

    let views = permits
        .into_iter()
        .map(|p| PermitView::annotate(p, today))
        .collect();

    Ok(Json(views))
}

/// POST /api/v1/permits
pub async fn create_permit(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePermit>,
) -> AppResult<(StatusCode, Json<Permit>)> {
    authorize(&user, PERM_WRITE_ALL)?;

    if input.doc_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Document name must not be empty".into(),
        )));
    }

    let permit = PermitRepo::create(&state.pool, &input).await?;
    tracing::info!(
        permit_id = permit.id,
        project_id = permit.project_id,
        "permit created"
    );
    Ok((StatusCode::CREATED, Json(permit)))
}
