// handlers/system.rs - GET / and GET /health

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Tourney API",
        "version": version,
        "description": "Tournament record store gated by per-record admin tokens",
        "endpoints": {
            "load": "GET /load?id=:id (public)",
            "save": "POST /save (admin token)",
            "delete": "DELETE /tournament/:id (admin token)",
            "health": "GET /health (public)",
        }
    }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let backend = state.service.store().backend();

    match state.service.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": backend,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Health check failed for {} store: {}", backend, e);
            ApiError::service_unavailable("store unavailable").into_response()
        }
    }
}
