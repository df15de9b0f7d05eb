//! Handlers for the `/claims` resource (financial claims and their
//! approval lifecycle).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gantry_core::claims::{can_transition, ClaimStatus};
use gantry_core::error::CoreError;
use gantry_core::permissions::{
    has_permission, PERM_APPROVE_CLAIMS, PERM_READ_ALL, PERM_READ_OWN_CLAIMS,
    PERM_SUBMIT_CLAIMS,
};
use gantry_core::roles::Role;
use gantry_core::types::DbId;
use gantry_db::models::claim::{Claim, ClaimWithProject, CreateClaim};
use gantry_db::models::notification::{CreateNotification, NotificationType};
use gantry_db::repositories::{ClaimRepo, NotificationRepo, ProfileRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::authorize;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /claims`.
#[derive(Debug, Deserialize)]
pub struct ClaimListParams {
    pub project_id: Option<DbId>,
}

/// Request body for `POST /claims/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateClaimStatusRequest {
    pub status: ClaimStatus,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/claims
///
/// Submit a claim. The submitter is taken from the session, never from the
/// request body.
pub async fn submit_claim(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateClaim>,
) -> AppResult<(StatusCode, Json<Claim>)> {
    authorize(&user, PERM_SUBMIT_CLAIMS)?;

    if input.amount <= 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Claim amount must be greater than zero".into(),
        )));
    }
    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Claim description must not be empty".into(),
        )));
    }

    let claim = ClaimRepo::create(&state.pool, &input, user.user_id).await?;
    tracing::info!(
        claim_id = claim.id,
        project_id = claim.project_id,
        submitted_by = user.user_id,
        "claim submitted"
    );

    notify_admins_of_submission(&state, &claim).await;

    Ok((StatusCode::CREATED, Json(claim)))
}

/// GET /api/v1/claims?project_id=
///
/// Claim visibility follows the permission table: full readers see every
/// claim, submitters see only their own. `view_payment_status` does NOT
/// grant access here; clients get aggregate totals from the financial
/// summary instead of other parties' claims.
pub async fn list_claims(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ClaimListParams>,
) -> AppResult<Json<Vec<ClaimWithProject>>> {
    if has_permission(user.role, PERM_READ_ALL) {
        let claims = ClaimRepo::list_with_project(&state.pool, params.project_id).await?;
        return Ok(Json(claims));
    }

    if has_permission(user.role, PERM_READ_OWN_CLAIMS) {
        let claims = ClaimRepo::list_for_submitter(&state.pool, user.user_id).await?;
        return Ok(Json(claims));
    }

    Err(AppError::Core(CoreError::Forbidden(
        "No claim read permission".into(),
    )))
}

/// POST /api/v1/claims/{id}/status
///
/// Advance a claim along its lifecycle (`pending -> approved -> paid`).
/// Any other transition is rejected with 409 and the stored status is left
/// untouched, including under concurrent updates.
pub async fn update_claim_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClaimStatusRequest>,
) -> AppResult<Json<Claim>> {
    authorize(&user, PERM_APPROVE_CLAIMS)?;

    let claim = ClaimRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Claim",
                id,
            })
        })?;

    if !can_transition(claim.status, input.status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot move claim from '{}' to '{}'",
            claim.status, input.status
        ))));
    }

    // The expected-status guard makes this a compare-and-set: if another
    // approver won the race, no row matches and nothing changes.
    let updated =
        ClaimRepo::update_status(&state.pool, id, claim.status, input.status, user.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Conflict(
                    "Claim status changed concurrently; reload and retry".into(),
                ))
            })?;

    tracing::info!(
        claim_id = updated.id,
        status = %updated.status,
        approved_by = user.user_id,
        "claim status updated"
    );

    notify_submitter_of_update(&state, &updated).await;

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Notify every admin that a claim was submitted. Notification failures are
/// logged, never propagated -- the claim itself is already committed.
async fn notify_admins_of_submission(state: &AppState, claim: &Claim) {
    let admins = match ProfileRepo::user_ids_with_role(&state.pool, Role::Admin).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!(claim_id = claim.id, error = %e, "failed to list admins for notification");
            return;
        }
    };

    for admin_id in admins {
        let input = CreateNotification {
            user_id: Some(admin_id),
            kind: NotificationType::ClaimUpdate,
            title: "New claim submitted".to_string(),
            message: Some(format!(
                "A claim of ${:.2} is awaiting review",
                claim.amount
            )),
            link: Some("/admin/claims".to_string()),
        };
        if let Err(e) = NotificationRepo::create(&state.pool, &input).await {
            tracing::warn!(claim_id = claim.id, admin_id, error = %e, "failed to create notification");
        }
    }
}

/// Notify the submitter that their claim moved to a new status.
async fn notify_submitter_of_update(state: &AppState, claim: &Claim) {
    let Some(submitter) = claim.submitted_by else {
        return;
    };

    let input = CreateNotification {
        user_id: Some(submitter),
        kind: NotificationType::ClaimUpdate,
        title: format!("Claim {}", claim.status),
        message: Some(format!(
            "Your claim of ${:.2} is now {}",
            claim.amount, claim.status
        )),
        link: Some("/subcontractor".to_string()),
    };
    if let Err(e) = NotificationRepo::create(&state.pool, &input).await {
        tracing::warn!(claim_id = claim.id, submitter, error = %e, "failed to create notification");
    }
}
