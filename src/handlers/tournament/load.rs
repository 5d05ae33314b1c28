// handlers/tournament/load.rs - GET /load?id={id} handler

use axum::{
    extract::{RawQuery, State},
    Json,
};

use crate::app::AppState;
use crate::database::TournamentSnapshot;
use crate::error::{ApiError, ApiResult};

/// Returns `{tournament, updatedAt}`; the admin token digest never leaves the service.
pub async fn tournament_load(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<TournamentSnapshot>> {
    let id = query
        .as_deref()
        .and_then(query_id)
        .ok_or_else(|| ApiError::bad_request("Missing tournament id"))?;

    let snapshot = state.service.load(&id).await?;
    Ok(Json(snapshot))
}

/// First `id` parameter; parsed by hand so a malformed query string still
/// yields a JSON 400 rather than an extractor rejection.
fn query_id(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
