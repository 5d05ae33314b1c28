use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::TournamentStore;
use crate::handlers;
use crate::middleware::handle_panic;
use crate::services::TournamentService;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TournamentService>,
}

impl AppState {
    pub fn new(store: Arc<dyn TournamentStore>, config: &AppConfig) -> Self {
        let timeout = Duration::from_millis(config.store.operation_timeout_ms);
        Self {
            service: Arc::new(TournamentService::new(store, timeout)),
        }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/load", get(handlers::tournament_load))
        // Admin-token gated
        .route("/save", post(handlers::tournament_save))
        .route("/tournament/:id", delete(handlers::tournament_delete))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    // Outermost so a panic anywhere below still produces a JSON 500
    router.layer(CatchPanicLayer::custom(handle_panic))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
