//! Route definitions for file uploads.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::storage;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// The default axum body limit (2 MB) sits below the upload cap, so it
/// is raised here. Headroom covers the multipart framing; the handler
/// enforces the cap on the file itself.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(storage::upload))
        .layer(DefaultBodyLimit::max(storage::MAX_UPLOAD_BYTES + 64 * 1024))
}
