//! Webhook payload normalization.
//!
//! Maps a source-control webhook delivery (event tag plus JSON body) onto a
//! canonical [`ActionRecord`]. Only `push` and `pull_request` deliveries
//! produce records; everything else, including recognized events whose
//! payload lacks a required field, is ignored rather than rejected. The
//! producer is outside our control, so a bad delivery must never surface as
//! a hard failure.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::action::{ActionKind, ActionRecord};
use crate::display_time::format_display_timestamp;
use crate::types::Timestamp;

/// Request header carrying the webhook event tag.
pub const EVENT_HEADER: &str = "x-github-event";

pub const PUSH_EVENT: &str = "push";
pub const PULL_REQUEST_EVENT: &str = "pull_request";

// ---------------------------------------------------------------------------
// Payload shapes
// ---------------------------------------------------------------------------

/// The subset of a `push` payload we read.
#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    pub pusher: Pusher,
    /// Full ref, e.g. `refs/heads/main`.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Commit hash after the push.
    pub after: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pusher {
    pub name: String,
}

/// The subset of a `pull_request` payload we read.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    #[serde(default)]
    pub action: Option<String>,
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// Always an integer from the host; any other JSON type is malformed.
    pub id: u64,
    #[serde(default)]
    pub merged: Option<bool>,
    #[serde(default)]
    pub merged_by: Option<User>,
    #[serde(default)]
    pub user: Option<User>,
    pub head: BranchRef,
    pub base: BranchRef,
}

impl PullRequest {
    fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of normalizing one delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Record(ActionRecord),
    Ignored(IgnoreReason),
}

/// Why a delivery produced no record. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No event tag accompanied the delivery.
    MissingEventType,
    /// The event tag is not one we record.
    UnsupportedEvent(String),
    /// A recognized event whose body could not be read.
    MalformedPayload { event: String, detail: String },
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::MissingEventType => f.write_str("missing event type"),
            IgnoreReason::UnsupportedEvent(event) => write!(f, "unsupported event '{event}'"),
            IgnoreReason::MalformedPayload { event, detail } => {
                write!(f, "malformed '{event}' payload: {detail}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a delivery, stamping it with the current time.
pub fn normalize(event_type: Option<&str>, payload: &Value) -> Normalized {
    normalize_at(event_type, payload, chrono::Utc::now())
}

/// Normalize a delivery received at `received_at`.
pub fn normalize_at(
    event_type: Option<&str>,
    payload: &Value,
    received_at: Timestamp,
) -> Normalized {
    let Some(event_type) = event_type else {
        return Normalized::Ignored(IgnoreReason::MissingEventType);
    };

    let timestamp = format_display_timestamp(received_at);
    let record = match event_type {
        PUSH_EVENT => parse::<PushPayload>(event_type, payload).map(|p| from_push(p, timestamp)),
        PULL_REQUEST_EVENT => parse::<PullRequestPayload>(event_type, payload)
            .and_then(|p| from_pull_request(p, timestamp)),
        other => Err(IgnoreReason::UnsupportedEvent(other.to_string())),
    };

    match record {
        Ok(record) => Normalized::Record(record),
        Err(reason) => Normalized::Ignored(reason),
    }
}

fn parse<T: DeserializeOwned>(event: &str, payload: &Value) -> Result<T, IgnoreReason> {
    T::deserialize(payload).map_err(|e| malformed(event, e.to_string()))
}

fn malformed(event: &str, detail: impl Into<String>) -> IgnoreReason {
    IgnoreReason::MalformedPayload {
        event: event.to_string(),
        detail: detail.into(),
    }
}

fn from_push(payload: PushPayload, timestamp: String) -> ActionRecord {
    ActionRecord {
        author: payload.pusher.name,
        action: ActionKind::Push,
        from_branch: String::new(),
        to_branch: last_ref_segment(&payload.git_ref).to_string(),
        request_id: payload.after,
        timestamp,
    }
}

fn from_pull_request(
    payload: PullRequestPayload,
    timestamp: String,
) -> Result<ActionRecord, IgnoreReason> {
    let pr = payload.pull_request;
    let closed = payload.action.as_deref() == Some("closed");

    let (action, author) = if closed && pr.is_merged() {
        let merged_by = pr.merged_by.ok_or_else(|| {
            malformed(PULL_REQUEST_EVENT, "merged pull request without merged_by")
        })?;
        (ActionKind::Merge, merged_by.login)
    } else {
        let user = pr
            .user
            .ok_or_else(|| malformed(PULL_REQUEST_EVENT, "pull request without user"))?;
        (ActionKind::PullRequest, user.login)
    };

    Ok(ActionRecord {
        author,
        action,
        from_branch: pr.head.name,
        to_branch: pr.base.name,
        request_id: pr.id.to_string(),
        timestamp,
    })
}

/// `refs/heads/main` -> `main`.
fn last_ref_segment(git_ref: &str) -> &str {
    git_ref.rsplit('/').next().unwrap_or(git_ref)
}
