use actionfeed_core::action::StoredAction;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/actions
///
/// The most recent actions, newest first, capped at the configured limit.
pub async fn list_actions(State(state): State<AppState>) -> AppResult<Json<Vec<StoredAction>>> {
    let actions = state
        .store
        .recent(state.config.recent_actions_limit)
        .await?;
    Ok(Json(actions))
}
