//! Route definitions for the `/site-logs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::site_log;
use crate::state::AppState;

/// Routes mounted at `/site-logs`.
///
/// ```text
/// GET  /                 -> list_site_logs (?project_id)
/// POST /                 -> create_site_log
/// GET  /{id}/comments    -> list_comments
/// POST /{id}/comments    -> create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(site_log::list_site_logs).post(site_log::create_site_log),
        )
        .route(
            "/{id}/comments",
            get(site_log::list_comments).post(site_log::create_comment),
        )
}
