pub mod admin;
pub mod auth;
pub mod claim;
pub mod dashboard;
pub mod health;
pub mod notification;
pub mod permit;
pub mod project;
pub mod site_log;
pub mod storage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                       signup (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth, fire-and-forget)
/// /auth/forgot-password              issue reset token (public)
/// /auth/reset-password               consume reset token (public)
/// /auth/session                      session context (requires auth)
/// /auth/gate                         route guard decision (guest-friendly)
///
/// /admin/users                       list users (admin only)
/// /admin/users/{id}                  get user
/// /admin/users/{id}/role             reassign role (PUT)
/// /admin/users/{id}/deactivate       deactivate account (POST)
///
/// /projects                          list, create
/// /projects/{id}                     get, update, delete
///
/// /permits                           list (risk-annotated), create
/// /permits/expiring                  permits in the warning window
///
/// /claims                            list, submit (?project_id)
/// /claims/{id}/status                lifecycle transition (POST)
///
/// /site-logs                         list (?project_id), create
/// /site-logs/{id}/comments           list, add comments
///
/// /notifications                     list (?unread_only, limit, offset)
/// /notifications/unread-count        unread count (GET)
/// /notifications/read-all            mark all read (POST)
/// /notifications/{id}/read           mark read (POST)
///
/// /dashboard/overview                project and permit counts (GET)
/// /dashboard/progress                active-project progress listing (GET)
/// /dashboard/high-risk-permits       permits in the high-risk window (GET)
/// /dashboard/financials              claim totals by status (GET)
///
/// /uploads                           multipart file upload (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication, session context, and the route gate.
        .nest("/auth", auth::router())
        // Admin user management.
        .nest("/admin", admin::router())
        // Project CRUD.
        .nest("/projects", project::router())
        // Permit compliance listings.
        .nest("/permits", permit::router())
        // Financial claims and their approval lifecycle.
        .nest("/claims", claim::router())
        // Daily site logs and their discussion threads.
        .nest("/site-logs", site_log::router())
        // Per-user notifications and broadcasts.
        .nest("/notifications", notification::router())
        // Dashboard widget data.
        .nest("/dashboard", dashboard::router())
        // File uploads.
        .nest("/uploads", storage::router())
}
