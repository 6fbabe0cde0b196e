//! Response bodies for the webhook endpoint.

use serde::Serialize;

/// Outcome reported back to the webhook producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    /// A record was stored.
    Success,
    /// The delivery produced no record.
    Ignored,
}

/// `{ "status": "success" | "ignored" }`
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: WebhookStatus,
}

impl WebhookResponse {
    pub fn success() -> Self {
        Self {
            status: WebhookStatus::Success,
        }
    }

    pub fn ignored() -> Self {
        Self {
            status: WebhookStatus::Ignored,
        }
    }
}
