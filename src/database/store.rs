use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use super::record::TournamentRecord;
use crate::types::TournamentId;

/// Errors from store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store operation timed out after {0} ms")]
    Timeout(u64),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt record {id}: {reason}")]
    Corrupt { id: String, reason: String },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Key-value mapping from tournament id to record.
///
/// Records are keyed by the id string exactly as validated. Implementations
/// must be safe to share across concurrently running requests.
#[async_trait]
pub trait TournamentStore: Send + Sync {
    async fn get(&self, id: &TournamentId) -> Result<Option<TournamentRecord>, StoreError>;

    /// Create-if-absent. Returns false, leaving the stored record untouched,
    /// when `record.id` is already taken.
    async fn insert(&self, record: &TournamentRecord) -> Result<bool, StoreError>;

    /// Replace the payload of the record stored under `record.id`, but only
    /// while it still carries `record.admin_token_hash`. The stored
    /// `updated_at` becomes the later of the two. Returns the stored
    /// `updated_at`, or `None` when no such record exists any more.
    async fn update(&self, record: &TournamentRecord) -> Result<Option<DateTime<Utc>>, StoreError>;

    /// Returns true iff a record existed and was removed by this call
    async fn delete(&self, id: &TournamentId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;

    /// Release connections on shutdown
    async fn close(&self) {}

    /// Short backend name for logs and /health
    fn backend(&self) -> &'static str;
}
