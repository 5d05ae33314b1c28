use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::auth::hash_admin_token;
use crate::database::{MemoryStore, StoreError, TournamentRecord, TournamentStore};
use crate::services::TournamentService;
use crate::types::TournamentId;

/// Service wired to a fresh in-memory store
pub struct TestContext {
    pub store: MemoryStore,
    pub service: TournamentService,
}

impl TestContext {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let service = TournamentService::new(Arc::new(store.clone()), Duration::from_secs(5));
        Self { store, service }
    }

    /// Insert a record directly, bypassing the service
    pub async fn seed(&self, id: &str, tournament: Value, token: &str) -> TournamentRecord {
        let record = seed_record(id, tournament, token);
        assert!(self.store.insert(&record).await.unwrap(), "id already seeded");
        record
    }

    pub async fn store_record(&self, id: &str) -> TournamentRecord {
        let id = TournamentId::parse(id).unwrap();
        self.store.get(&id).await.unwrap().expect("record should exist")
    }
}

pub fn seed_record(id: &str, tournament: Value, token: &str) -> TournamentRecord {
    TournamentRecord::new(
        TournamentId::parse(id).unwrap(),
        tournament,
        hash_admin_token(token),
        Utc::now(),
    )
}

#[derive(Debug, Default, Clone, Copy)]
enum DeleteMode {
    #[default]
    Normal,
    /// Another writer removes the record between get and delete
    Vanishing,
    /// The backend claims nothing was removed but keeps the record
    Refusing,
}

/// Memory store that counts every call made through the trait
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
    mode: DeleteMode,
}

impl CountingStore {
    pub fn vanishing_on_delete() -> Self {
        Self {
            mode: DeleteMode::Vanishing,
            ..Self::default()
        }
    }

    pub fn refusing_delete() -> Self {
        Self {
            mode: DeleteMode::Refusing,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Seed without counting
    pub async fn seed(&self, id: &str, tournament: Value, token: &str) {
        self.inner.insert(&seed_record(id, tournament, token)).await.unwrap();
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TournamentStore for CountingStore {
    async fn get(&self, id: &TournamentId) -> Result<Option<TournamentRecord>, StoreError> {
        self.record_call();
        self.inner.get(id).await
    }

    async fn insert(&self, record: &TournamentRecord) -> Result<bool, StoreError> {
        self.record_call();
        self.inner.insert(record).await
    }

    async fn update(&self, record: &TournamentRecord) -> Result<Option<DateTime<Utc>>, StoreError> {
        self.record_call();
        self.inner.update(record).await
    }

    async fn delete(&self, id: &TournamentId) -> Result<bool, StoreError> {
        self.record_call();
        match self.mode {
            DeleteMode::Normal => self.inner.delete(id).await,
            DeleteMode::Vanishing => {
                self.inner.delete(id).await?;
                Ok(false)
            }
            DeleteMode::Refusing => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.record_call();
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "counting"
    }
}

/// Store whose calls never complete
#[derive(Debug)]
pub struct StallingStore;

#[async_trait]
impl TournamentStore for StallingStore {
    async fn get(&self, _id: &TournamentId) -> Result<Option<TournamentRecord>, StoreError> {
        std::future::pending().await
    }

    async fn insert(&self, _record: &TournamentRecord) -> Result<bool, StoreError> {
        std::future::pending().await
    }

    async fn update(&self, _record: &TournamentRecord) -> Result<Option<DateTime<Utc>>, StoreError> {
        std::future::pending().await
    }

    async fn delete(&self, _id: &TournamentId) -> Result<bool, StoreError> {
        std::future::pending().await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        std::future::pending().await
    }

    fn backend(&self) -> &'static str {
        "stalling"
    }
}

/// Memory store whose reads return what they saw only after `delay`, so
/// other writers can act on the record in between
#[derive(Debug, Clone)]
pub struct DelayedReadStore {
    inner: MemoryStore,
    delay: Duration,
}

impl DelayedReadStore {
    pub fn new(inner: MemoryStore, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl TournamentStore for DelayedReadStore {
    async fn get(&self, id: &TournamentId) -> Result<Option<TournamentRecord>, StoreError> {
        let seen = self.inner.get(id).await;
        tokio::time::sleep(self.delay).await;
        seen
    }

    async fn insert(&self, record: &TournamentRecord) -> Result<bool, StoreError> {
        self.inner.insert(record).await
    }

    async fn update(&self, record: &TournamentRecord) -> Result<Option<DateTime<Utc>>, StoreError> {
        self.inner.update(record).await
    }

    async fn delete(&self, id: &TournamentId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.inner.health_check().await
    }

    fn backend(&self) -> &'static str {
        "delayed"
    }
}
