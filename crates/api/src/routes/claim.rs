//! Route definitions for the `/claims` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::claim;
use crate::state::AppState;

/// Routes mounted at `/claims`.
///
/// ```text
/// GET  /              -> list_claims (?project_id)
/// POST /              -> submit_claim
/// POST /{id}/status   -> update_claim_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(claim::list_claims).post(claim::submit_claim))
        .route("/{id}/status", post(claim::update_claim_status))
}
