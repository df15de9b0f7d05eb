//! Handlers for the `/dashboard` widget endpoints.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use gantry_core::permissions::{
    PERM_READ_ALL, PERM_VIEW_PAYMENT_STATUS, PERM_VIEW_PROJECTS,
};
use gantry_core::permits::{EXPIRY_WARNING_DAYS, HIGH_RISK_WINDOW_DAYS};
use gantry_core::projects::ProjectStatus;
use gantry_db::models::claim::FinancialSummary;
use gantry_db::repositories::{ClaimRepo, PermitRepo, ProjectRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::permit::PermitView;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{authorize, authorize_any};
use crate::state::AppState;

/// Response body for `GET /dashboard/overview`.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub active_projects: i64,
    pub completed_projects: i64,
    /// Permits inside the expiry warning window, expired included.
    pub expiring_permits: i64,
}

/// GET /api/v1/dashboard/overview
///
/// Headline counts for the operations dashboard.
pub async fn overview(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<OverviewResponse>> {
    authorize_any(&user, &[PERM_READ_ALL, PERM_VIEW_PROJECTS])?;

    let cutoff = Utc::now().date_naive() + chrono::Duration::days(EXPIRY_WARNING_DAYS);

    // Independent queries, fetched concurrently.
    let (active_projects, completed_projects, expiring_permits) = tokio::try_join!(
        ProjectRepo::count_by_status(&state.pool, ProjectStatus::Active),
        ProjectRepo::count_by_status(&state.pool, ProjectStatus::Completed),
        PermitRepo::count_at_risk(&state.pool, cutoff),
    )?;

    Ok(Json(OverviewResponse {
        active_projects,
        completed_projects,
        expiring_permits,
    }))
}

/// GET /api/v1/dashboard/high-risk-permits
///
/// Permits expiring inside the tighter high-risk window, for the admin
/// analytics view. Expired permits are included.
pub async fn high_risk_permits(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<PermitView>>> {
    authorize(&user, PERM_READ_ALL)?;

    let today = Utc::now().date_naive();
    let cutoff = today + chrono::Duration::days(HIGH_RISK_WINDOW_DAYS);
    let permits = PermitRepo::list_expiring_by(&state.pool, cutoff).await?;

    let views = permits
        .into_iter()
        .map(|p| PermitView::annotate(p, today))
        .collect();

    Ok(Json(views))
}

/// One row in the active-project progress listing.
#[derive(Debug, Serialize)]
pub struct ProjectProgress {
    pub id: gantry_core::types::DbId,
    pub name: String,
    pub progress_percent: i32,
}

/// GET /api/v1/dashboard/progress
///
/// Active projects with their completion percentage, most recently
/// started first.
pub async fn progress(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ProjectProgress>>> {
    authorize_any(&user, &[PERM_READ_ALL, PERM_VIEW_PROJECTS])?;
    let rows = ProjectRepo::list_active(&state.pool).await?;
    let listing = rows
        .into_iter()
        .map(|p| ProjectProgress {
            id: p.id,
            name: p.name,
            progress_percent: p.progress_percent,
        })
        .collect();
    Ok(Json(listing))
}

/// GET /api/v1/dashboard/financials
///
/// Claim totals bucketed by lifecycle status.
pub async fn financials(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<FinancialSummary>> {
    authorize_any(&user, &[PERM_READ_ALL, PERM_VIEW_PAYMENT_STATUS])?;
    let summary = ClaimRepo::financial_summary(&state.pool).await?;
    Ok(Json(summary))
}
