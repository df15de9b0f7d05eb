//! Route-guard and landing-page policy.
//!
//! Pure decision functions: given the authentication state and the current
//! path, where should the client go? Being pure makes the guard trivially
//! idempotent -- re-evaluating the same inputs yields the same single
//! destination, never a second navigation.

use serde::Serialize;

use crate::roles::Role;

/// Paths an authenticated session must be redirected away from.
pub const GUEST_ONLY_PATHS: &[&str] = &["/login", "/signup", "/forgot-password"];

/// Paths reachable without a session. `/reset-password` is public but not
/// guest-only: it requires a one-time recovery session, and when that is
/// missing the page shows its invalid-link state instead of redirecting,
/// which is what keeps the guard from looping.
pub const PUBLIC_PATHS: &[&str] = &["/login", "/signup", "/forgot-password", "/reset-password"];

/// Where the guard sends the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardOutcome {
    /// Render the requested path unchanged.
    Render,
    /// No session on a protected path: go to `/login`.
    RedirectToLogin,
    /// Active session on a guest-only path: go to `/`.
    RedirectHome,
}

/// Route-guard decision for `path` given the authentication state.
pub fn guard_route(authenticated: bool, path: &str) -> GuardOutcome {
    if !authenticated && !PUBLIC_PATHS.contains(&path) {
        return GuardOutcome::RedirectToLogin;
    }
    if authenticated && GUEST_ONLY_PATHS.contains(&path) {
        return GuardOutcome::RedirectHome;
    }
    GuardOutcome::Render
}

/// The role-specific landing page for an authenticated user.
///
/// Admins, supervisors, and users whose role is still unresolved stay on
/// the generic dashboard.
pub fn landing_path(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Client) => "/client",
        Some(Role::Subcontractor) => "/subcontractor",
        _ => "/",
    }
}

/// Redirect target when an authenticated user arrives at the generic
/// dashboard route (`/`). `None` means render the dashboard in place.
pub fn dashboard_redirect(role: Option<Role>) -> Option<&'static str> {
    match landing_path(role) {
        "/" => None,
        portal => Some(portal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_protected_path_goes_to_login() {
        assert_eq!(guard_route(false, "/projects"), GuardOutcome::RedirectToLogin);
        assert_eq!(guard_route(false, "/"), GuardOutcome::RedirectToLogin);
        assert_eq!(guard_route(false, "/admin/users"), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn test_authenticated_guest_only_path_goes_home() {
        assert_eq!(guard_route(true, "/login"), GuardOutcome::RedirectHome);
        assert_eq!(guard_route(true, "/signup"), GuardOutcome::RedirectHome);
        assert_eq!(guard_route(true, "/forgot-password"), GuardOutcome::RedirectHome);
    }

    #[test]
    fn test_authenticated_protected_path_renders() {
        assert_eq!(guard_route(true, "/projects"), GuardOutcome::Render);
        assert_eq!(guard_route(true, "/"), GuardOutcome::Render);
    }

    #[test]
    fn test_unauthenticated_public_paths_render() {
        for path in PUBLIC_PATHS {
            assert_eq!(guard_route(false, path), GuardOutcome::Render);
        }
    }

    /// Reset-password must never redirect an unauthenticated visitor: the
    /// page itself explains the invalid/expired link.
    #[test]
    fn test_reset_password_does_not_loop() {
        assert_eq!(guard_route(false, "/reset-password"), GuardOutcome::Render);
        assert_eq!(guard_route(true, "/reset-password"), GuardOutcome::Render);
    }

    #[test]
    fn test_landing_paths_per_role() {
        assert_eq!(landing_path(Some(Role::Client)), "/client");
        assert_eq!(landing_path(Some(Role::Subcontractor)), "/subcontractor");
        assert_eq!(landing_path(Some(Role::Admin)), "/");
        assert_eq!(landing_path(Some(Role::Supervisor)), "/");
        assert_eq!(landing_path(None), "/");
    }

    #[test]
    fn test_dashboard_redirect_is_idempotent() {
        // Two evaluations with the same role produce the same single target.
        let first = dashboard_redirect(Some(Role::Client));
        let second = dashboard_redirect(Some(Role::Client));
        assert_eq!(first, Some("/client"));
        assert_eq!(first, second);

        assert_eq!(dashboard_redirect(Some(Role::Subcontractor)), Some("/subcontractor"));
        assert_eq!(dashboard_redirect(Some(Role::Admin)), None);
        assert_eq!(dashboard_redirect(None), None);
    }
}
