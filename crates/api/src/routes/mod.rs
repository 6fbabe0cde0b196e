pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Largest webhook body accepted. Matches the source-control host's own cap
/// on delivery size, well above axum's 2 MiB default.
pub const WEBHOOK_BODY_LIMIT: usize = 25 * 1024 * 1024;

/// Build the action feed route tree.
///
/// ```text
/// POST /webhook          receive a webhook delivery
/// GET  /api/actions      most recent actions, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/webhook",
            post(handlers::webhook::receive_webhook)
                .layer(DefaultBodyLimit::max(WEBHOOK_BODY_LIMIT)),
        )
        .route("/api/actions", get(handlers::actions::list_actions))
}
