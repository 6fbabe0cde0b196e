//! `github_actions` row model.

use actionfeed_core::action::{ActionRecord, StoredAction};
use actionfeed_core::error::CoreError;
use actionfeed_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `github_actions` table.
#[derive(Debug, Clone, FromRow)]
pub struct ActionRow {
    pub id: DbId,
    pub author: String,
    pub action: String,
    pub from_branch: String,
    pub to_branch: String,
    pub request_id: String,
    pub timestamp: String,
    pub created_at: Timestamp,
}

impl TryFrom<ActionRow> for StoredAction {
    type Error = CoreError;

    fn try_from(row: ActionRow) -> Result<Self, Self::Error> {
        Ok(StoredAction {
            id: row.id,
            record: ActionRecord {
                author: row.author,
                action: row.action.parse()?,
                from_branch: row.from_branch,
                to_branch: row.to_branch,
                request_id: row.request_id,
                timestamp: row.timestamp,
            },
        })
    }
}
