use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::record::TournamentRecord;
use super::store::{StoreError, TournamentStore};
use crate::types::TournamentId;

/// Process-local store, used for development and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<TournamentId, TournamentRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TournamentStore for MemoryStore {
    async fn get(&self, id: &TournamentId) -> Result<Option<TournamentRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn insert(&self, record: &TournamentRecord) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.entry(record.id.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(true)
            }
        }
    }

    async fn update(&self, record: &TournamentRecord) -> Result<Option<DateTime<Utc>>, StoreError> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.id) {
            Some(stored) if stored.admin_token_hash == record.admin_token_hash => {
                stored.tournament = record.tournament.clone();
                stored.updated_at = stored.updated_at.max(record.updated_at);
                Ok(Some(stored.updated_at))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: &TournamentId) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        Ok(records.remove(id).is_some())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {
        let mut records = self.records.write().await;
        tracing::info!("Dropping {} in-memory tournament records", records.len());
        records.clear();
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
