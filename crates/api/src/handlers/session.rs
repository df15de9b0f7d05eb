//! Session context and route-gate handlers.
//!
//! `GET /auth/session` is the single source the UI reads its identity from:
//! the verified role, the permission set that role grants, the role-specific
//! landing path, and the navigation entries the role may see. `GET
//! /auth/gate` answers render-or-redirect for a path so clients never
//! reimplement the guard rules.

use axum::extract::{Query, State};
use axum::Json;
use gantry_core::error::CoreError;
use gantry_core::nav::{mobile_entries, visible_entries, NavEntry, SIDEBAR_NAV};
use gantry_core::permissions::permissions_for;
use gantry_core::roles::Role;
use gantry_core::routing::{guard_route, landing_path, GuardOutcome};
use gantry_core::types::DbId;
use gantry_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::resolver::resolve_role;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Response body for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: SessionUser,
    /// `None` when the role lookup failed or timed out.
    pub role: Option<Role>,
    /// Permissions granted by the role; empty for a roleless session.
    pub permissions: Vec<&'static str>,
    /// Where this role lands after login.
    pub landing_path: &'static str,
    pub nav: NavResponse,
}

/// Identity fields embedded in [`SessionResponse`].
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: DbId,
    pub email: String,
    pub full_name: Option<String>,
}

/// Role-filtered navigation entries.
#[derive(Debug, Serialize)]
pub struct NavResponse {
    pub sidebar: Vec<NavItem>,
    /// Capped for small screens.
    pub mobile: Vec<NavItem>,
}

/// One navigation entry as the UI renders it.
#[derive(Debug, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

impl From<&'static NavEntry> for NavItem {
    fn from(entry: &'static NavEntry) -> Self {
        NavItem {
            title: entry.title,
            path: entry.path,
            icon: entry.icon,
        }
    }
}

/// Query parameters for `GET /auth/gate`.
#[derive(Debug, Deserialize)]
pub struct GateParams {
    pub path: String,
}

/// Response body for `GET /auth/gate`.
#[derive(Debug, Serialize)]
pub struct GateResponse {
    pub outcome: GuardOutcome,
    /// Set when `outcome` is a redirect.
    pub redirect_to: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/auth/session
///
/// The authenticated user's full session context. The role is looked up
/// fresh rather than echoed from the token, so a reassignment shows up
/// here before the access token rotates.
pub async fn session(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<SessionResponse>> {
    let record = UserRepo::find_record(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
        })?;

    let role = resolve_role(&state.pool, auth_user.user_id).await;
    let permissions = match role {
        Some(role) => permissions_for(role).to_vec(),
        None => Vec::new(),
    };

    Ok(Json(SessionResponse {
        user: SessionUser {
            id: record.id,
            email: record.email,
            full_name: record.full_name,
        },
        role,
        permissions,
        landing_path: landing_path(role),
        nav: NavResponse {
            sidebar: visible_entries(role, SIDEBAR_NAV)
                .into_iter()
                .map(NavItem::from)
                .collect(),
            mobile: mobile_entries(role).into_iter().map(NavItem::from).collect(),
        },
    }))
}

/// GET /api/v1/auth/gate?path=/claims
///
/// Render-or-redirect decision for a path. Works for guests too: an
/// invalid or absent token is treated as unauthenticated, not rejected.
pub async fn gate(
    OptionalAuthUser(auth_user): OptionalAuthUser,
    Query(params): Query<GateParams>,
) -> Json<GateResponse> {
    let role = auth_user.as_ref().and_then(|u| u.role);
    let outcome = guard_route(auth_user.is_some(), &params.path);

    let redirect_to = match outcome {
        GuardOutcome::Render => None,
        GuardOutcome::RedirectToLogin => Some("/login"),
        GuardOutcome::RedirectHome => Some(landing_path(role)),
    };

    Json(GateResponse {
        outcome,
        redirect_to,
    })
}
