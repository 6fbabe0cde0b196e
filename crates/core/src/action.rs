//! Canonical repository action records.
//!
//! Every accepted webhook delivery is reduced to an [`ActionRecord`]. Once
//! persisted it gains an id and becomes a [`StoredAction`]. Records are never
//! updated or deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// The kind of repository activity an action record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Push,
    PullRequest,
    Merge,
}

impl ActionKind {
    /// All kinds, in declaration order.
    pub const ALL: [ActionKind; 3] = [
        ActionKind::Push,
        ActionKind::PullRequest,
        ActionKind::Merge,
    ];

    /// The stored / serialized form (`PUSH`, `PULL_REQUEST`, `MERGE`).
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Push => "PUSH",
            ActionKind::PullRequest => "PULL_REQUEST",
            ActionKind::Merge => "MERGE",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown action kind '{s}'")))
    }
}

/// A normalized action, ready to be appended to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Login or name of whoever triggered the event.
    pub author: String,
    pub action: ActionKind,
    /// Source branch; empty for pushes.
    pub from_branch: String,
    pub to_branch: String,
    /// Commit hash for pushes, pull request id otherwise.
    pub request_id: String,
    /// Human-readable receipt time, see [`crate::display_time`].
    pub timestamp: String,
}

/// An [`ActionRecord`] that has been persisted and assigned an id.
///
/// Ids increase with insertion order, so sorting by id descending yields
/// the most recent actions first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredAction {
    #[serde(rename = "_id", serialize_with = "serialize_id")]
    pub id: DbId,
    #[serde(flatten)]
    pub record: ActionRecord,
}

fn serialize_id<S: serde::Serializer>(id: &DbId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}
