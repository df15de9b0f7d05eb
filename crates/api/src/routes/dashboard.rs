//! Route definitions for the `/dashboard` widget endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(dashboard::overview))
        .route("/progress", get(dashboard::progress))
        .route("/high-risk-permits", get(dashboard::high_risk_permits))
        .route("/financials", get(dashboard::financials))
}
