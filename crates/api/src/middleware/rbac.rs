//! Role-based access control extractors and the permission gate.
//!
//! All authorization decisions flow through [`authorize`], which defers to
//! the central permission table. Handlers never compare role names
//! directly; they name the permission the operation needs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gantry_core::error::CoreError;
use gantry_core::permissions::{has_permission, PERM_MANAGE_USERS};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Reject with 403 Forbidden unless the user's role grants `permission`.
///
/// A user with an unresolved role (`role == None`) fails every check,
/// including this one.
pub fn authorize(user: &AuthUser, permission: &str) -> Result<(), AppError> {
    if !has_permission(user.role, permission) {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Permission '{permission}' required"
        ))));
    }
    Ok(())
}

/// Reject with 403 Forbidden unless the user's role grants at least one of
/// `permissions`.
///
/// Read endpoints shared across roles use this: each role reaches the same
/// resource through its own permission (an admin via `read_all`, a
/// supervisor via `view_projects`, and so on).
pub fn authorize_any(user: &AuthUser, permissions: &[&str]) -> Result<(), AppError> {
    if permissions
        .iter()
        .any(|p| has_permission(user.role, p))
    {
        return Ok(());
    }
    Err(AppError::Core(CoreError::Forbidden(format!(
        "One of [{}] required",
        permissions.join(", ")
    ))))
}

/// Requires the user-management permission (admin only). Rejects with 403
/// Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to hold manage_users here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        authorize(&user, PERM_MANAGE_USERS)?;
        Ok(RequireAdmin(user))
    }
}
