//! Route definitions for the `/permits` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::permit;
use crate::state::AppState;

/// Routes mounted at `/permits`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(permit::list_permits).post(permit::create_permit))
        .route("/expiring", get(permit::list_expiring_permits))
}
