//! Inbound webhook deliveries from the source-control host.

use actionfeed_core::normalize::{self, IgnoreReason, Normalized, EVENT_HEADER};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::response::WebhookResponse;
use crate::state::AppState;

/// POST /webhook
///
/// Normalize the delivery and store it when it maps to an action. Anything
/// unrecognized or unreadable is acknowledged as `ignored`; only a storage
/// failure produces a non-200 response.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<WebhookResponse>> {
    let event_type = headers
        .get(EVENT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim);

    let outcome = match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => normalize::normalize(event_type, &payload),
        Err(e) => Normalized::Ignored(IgnoreReason::MalformedPayload {
            event: event_type.unwrap_or_default().to_string(),
            detail: e.to_string(),
        }),
    };

    let record = match outcome {
        Normalized::Record(record) => record,
        Normalized::Ignored(reason) => {
            tracing::info!(reason = %reason, "Webhook ignored");
            return Ok(Json(WebhookResponse::ignored()));
        }
    };

    let stored = state.store.append(record).await?;

    tracing::info!(
        action_id = stored.id,
        action = %stored.record.action,
        author = %stored.record.author,
        to_branch = %stored.record.to_branch,
        "Action recorded",
    );

    Ok(Json(WebhookResponse::success()))
}
