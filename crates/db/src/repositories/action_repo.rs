//! Repository for the `github_actions` table.

use actionfeed_core::action::ActionRecord;
use sqlx::PgPool;

use crate::models::action::ActionRow;

/// Column list for `github_actions` queries.
const COLUMNS: &str =
    "id, author, action, from_branch, to_branch, request_id, timestamp, created_at";

/// Append and recency reads for action records. There is no update or delete.
pub struct ActionRepo;

impl ActionRepo {
    /// Insert a record, returning the stored row with its generated id.
    pub async fn insert(pool: &PgPool, record: &ActionRecord) -> Result<ActionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO github_actions \
                (author, action, from_branch, to_branch, request_id, timestamp) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActionRow>(&query)
            .bind(&record.author)
            .bind(record.action.as_str())
            .bind(&record.from_branch)
            .bind(&record.to_branch)
            .bind(&record.request_id)
            .bind(&record.timestamp)
            .fetch_one(pool)
            .await
    }

    /// List up to `limit` rows, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<ActionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM github_actions ORDER BY id DESC LIMIT $1");
        sqlx::query_as::<_, ActionRow>(&query)
            .bind(limit.max(0))
            .fetch_all(pool)
            .await
    }

    /// Total number of stored rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM github_actions")
            .fetch_one(pool)
            .await
    }
}
