//! The action store gateway.
//!
//! [`ActionStore`] is the only persistence surface the HTTP layer sees:
//! append a record, read the most recent ones. [`PgActionStore`] backs it
//! with Postgres; [`MemoryActionStore`] keeps records in process for tests
//! and local runs without a database.

use actionfeed_core::action::{ActionRecord, StoredAction};
use actionfeed_core::error::CoreError;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::repositories::ActionRepo;
use crate::DbPool;

/// Failure of a storage operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A stored row could not be mapped back to a record.
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Append-only store of action records.
///
/// Implementations must assign ids that increase with insertion order and
/// must be safe to share across concurrent requests.
#[async_trait]
pub trait ActionStore: Send + Sync {
    /// Persist a record and return it with its assigned id.
    async fn append(&self, record: ActionRecord) -> StoreResult<StoredAction>;

    /// Up to `limit` records, most recently appended first.
    async fn recent(&self, limit: i64) -> StoreResult<Vec<StoredAction>>;

    /// Whether the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}

// ---------------------------------------------------------------------------
// Postgres
// ---------------------------------------------------------------------------

/// [`ActionStore`] over the `github_actions` table.
#[derive(Debug, Clone)]
pub struct PgActionStore {
    pool: DbPool,
}

impl PgActionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionStore for PgActionStore {
    async fn append(&self, record: ActionRecord) -> StoreResult<StoredAction> {
        let row = ActionRepo::insert(&self.pool, &record).await?;
        tracing::debug!(id = row.id, action = %row.action, "Inserted action row");
        Ok(StoredAction::try_from(row)?)
    }

    async fn recent(&self, limit: i64) -> StoreResult<Vec<StoredAction>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        ActionRepo::list_recent(&self.pool, limit)
            .await?
            .into_iter()
            .map(|row| StoredAction::try_from(row).map_err(StoreError::from))
            .collect()
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// [`ActionStore`] held in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryActionStore {
    actions: RwLock<Vec<StoredAction>>,
}

impl MemoryActionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.actions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.actions.read().await.is_empty()
    }
}

#[async_trait]
impl ActionStore for MemoryActionStore {
    async fn append(&self, record: ActionRecord) -> StoreResult<StoredAction> {
        let mut actions = self.actions.write().await;
        // Ids start at 1, like BIGSERIAL.
        let id = actions.last().map_or(1, |last| last.id + 1);
        let stored = StoredAction { id, record };
        actions.push(stored.clone());
        Ok(stored)
    }

    async fn recent(&self, limit: i64) -> StoreResult<Vec<StoredAction>> {
        let take = usize::try_from(limit).unwrap_or(0);
        let actions = self.actions.read().await;
        Ok(actions.iter().rev().take(take).cloned().collect())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
