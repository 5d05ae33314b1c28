#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tourney_api::app::{app, AppState};
use tourney_api::auth::hash_admin_token;
use tourney_api::config::AppConfig;
use tourney_api::database::{MemoryStore, StoreError, TournamentRecord, TournamentStore};
use tourney_api::types::TournamentId;

pub const SCENARIO_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub store: MemoryStore,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Insert a record straight into the store
    pub async fn seed(&self, id: &str, tournament: Value, token: &str) -> Result<TournamentRecord> {
        let record = TournamentRecord::new(
            TournamentId::parse(id)?,
            tournament,
            hash_admin_token(token),
            Utc::now(),
        );
        anyhow::ensure!(self.store.insert(&record).await?, "{} already seeded", id);
        Ok(record)
    }

    pub async fn stored(&self, id: &str) -> Result<Option<TournamentRecord>> {
        Ok(self.store.get(&TournamentId::parse(id)?).await?)
    }
}

/// Router built the same way the binary builds it, over a fresh memory store
pub fn test_router() -> (axum::Router, MemoryStore) {
    let store = MemoryStore::new();
    let config = AppConfig::default();
    let state = AppState::new(Arc::new(store.clone()), &config);
    (app(state, &config), store)
}

/// Router whose store refuses every call
pub fn unavailable_router() -> axum::Router {
    let config = AppConfig::default();
    let state = AppState::new(Arc::new(UnavailableStore), &config);
    app(state, &config)
}

/// Serve a fresh app on an unused local port
pub async fn spawn_server() -> Result<TestServer> {
    let (router, store) = test_router();
    serve(router, store).await
}

async fn serve(router: axum::Router, store: MemoryStore) -> Result<TestServer> {
    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("test server stopped: {}", e);
        }
    });

    Ok(TestServer {
        port,
        base_url,
        store,
        client: reqwest::Client::new(),
    })
}

/// Backend that is down: every call fails as unavailable
pub struct UnavailableStore;

#[async_trait]
impl TournamentStore for UnavailableStore {
    async fn get(&self, _id: &TournamentId) -> Result<Option<TournamentRecord>, StoreError> {
        Err(refused())
    }

    async fn insert(&self, _record: &TournamentRecord) -> Result<bool, StoreError> {
        Err(refused())
    }

    async fn update(&self, _record: &TournamentRecord) -> Result<Option<DateTime<Utc>>, StoreError> {
        Err(refused())
    }

    async fn delete(&self, _id: &TournamentId) -> Result<bool, StoreError> {
        Err(refused())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(refused())
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}

fn refused() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}
