use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::auth::{hash_admin_token, normalize_admin_token};
use crate::database::{StoreError, TournamentRecord, TournamentSnapshot, TournamentStore};
use crate::types::TournamentId;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Admin token required")]
    Unauthenticated,
    #[error("Admin token rejected")]
    Unauthorized,
    #[error("Tournament not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

/// Input for creating or replacing a tournament
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTournament {
    pub id: Option<String>,
    pub tournament: Option<Value>,
    pub admin_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub id: TournamentId,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub created: bool,
}

/// Validate → fetch → authorize → mutate for tournament records.
///
/// The only writer of the store. Holds no record state between calls.
pub struct TournamentService {
    store: Arc<dyn TournamentStore>,
    operation_timeout: Duration,
}

impl TournamentService {
    pub fn new(store: Arc<dyn TournamentStore>, operation_timeout: Duration) -> Self {
        Self {
            store,
            operation_timeout,
        }
    }

    pub fn store(&self) -> &Arc<dyn TournamentStore> {
        &self.store
    }

    /// Fetch the public view of a tournament
    pub async fn load(&self, raw_id: &str) -> Result<TournamentSnapshot, ServiceError> {
        let id = parse_id(raw_id)?;

        let record = self
            .bounded(self.store.get(&id))
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        Ok(record.snapshot())
    }

    /// Remove a tournament after verifying its admin token
    pub async fn delete(&self, raw_id: &str, token: Option<&str>) -> Result<(), ServiceError> {
        let id = parse_id(raw_id)?;
        let token = token
            .and_then(normalize_admin_token)
            .ok_or(ServiceError::Unauthenticated)?;

        let record = self
            .bounded(self.store.get(&id))
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        if !record.admin_token_hash.verify(token) {
            warn!(tournament = %id, "Rejected delete with mismatched admin token");
            return Err(ServiceError::Unauthorized);
        }

        if self.bounded(self.store.delete(&id)).await? {
            info!(tournament = %id, "Deleted tournament");
            return Ok(());
        }

        // Nothing removed: either a concurrent delete got there first or the
        // store failed to act on a record it still holds.
        match self.bounded(self.store.get(&id)).await? {
            None => Err(ServiceError::NotFound(id.to_string())),
            Some(_) => Err(ServiceError::Internal(format!(
                "store reported no removal for existing tournament {}",
                id
            ))),
        }
    }

    /// Create a tournament, or replace the payload of one the token owns
    pub async fn save(&self, request: SaveTournament) -> Result<SaveOutcome, ServiceError> {
        let id = match request.id.as_deref() {
            Some(raw) => parse_id(raw)?,
            None => TournamentId::generate(),
        };

        let tournament = match request.tournament {
            Some(Value::Null) | None => {
                return Err(ServiceError::InvalidArgument(
                    "Missing tournament payload".to_string(),
                ))
            }
            Some(value) => value,
        };

        let token = request
            .admin_token
            .as_deref()
            .and_then(normalize_admin_token)
            .ok_or(ServiceError::Unauthenticated)?;

        let now = Utc::now();
        if let Some(existing) = self.bounded(self.store.get(&id)).await? {
            return self.replace(existing, tournament, token, now).await;
        }

        let record = TournamentRecord::new(id.clone(), tournament, hash_admin_token(token), now);
        if self.bounded(self.store.insert(&record)).await? {
            info!(tournament = %id, "Created tournament");
            return Ok(SaveOutcome {
                id,
                updated_at: record.updated_at,
                created: true,
            });
        }

        // Another save created the id between our read and insert: treat this
        // one as an update against whoever won.
        match self.bounded(self.store.get(&id)).await? {
            Some(existing) => self.replace(existing, record.tournament, token, now).await,
            None => Err(ServiceError::NotFound(id.to_string())),
        }
    }

    /// Replace the payload of an existing record the token owns. The write is
    /// conditional, so a record deleted or re-created meanwhile is not touched.
    async fn replace(
        &self,
        existing: TournamentRecord,
        tournament: Value,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<SaveOutcome, ServiceError> {
        let id = existing.id.clone();
        if !existing.admin_token_hash.verify(token) {
            warn!(tournament = %id, "Rejected save with mismatched admin token");
            return Err(ServiceError::Unauthorized);
        }

        let record = existing.with_tournament(tournament, now);
        let updated_at = self
            .bounded(self.store.update(&record))
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        info!(tournament = %id, "Updated tournament");
        Ok(SaveOutcome {
            id,
            updated_at,
            created: false,
        })
    }

    pub async fn health_check(&self) -> Result<(), ServiceError> {
        self.bounded(self.store.health_check()).await?;
        Ok(())
    }

    /// Apply the operation timeout to a store call. Dropping the returned
    /// future (e.g. on client disconnect) cancels the call as well.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.operation_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.operation_timeout.as_millis() as u64)),
        }
    }
}

fn parse_id(raw: &str) -> Result<TournamentId, ServiceError> {
    if raw.is_empty() {
        return Err(ServiceError::InvalidArgument("Missing tournament id".to_string()));
    }
    TournamentId::parse(raw).map_err(|e| ServiceError::InvalidArgument(e.to_string()))
}
