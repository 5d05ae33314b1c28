// handlers/tournament/save.rs - POST /save handler

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::{parse_payload, resolve_admin_token, RequestPayload};
use crate::services::SaveTournament;
use crate::types::TournamentId;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub success: bool,
    pub id: TournamentId,
    pub updated_at: DateTime<Utc>,
}

/// Body: `{id?, tournament, adminToken?}`. 201 when the record is new, 200 on update.
pub async fn tournament_save(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<SaveResponse>)> {
    let body = body?;
    let mut request = match parse_payload::<SaveTournament>(&body) {
        RequestPayload::Present(request) => request,
        RequestPayload::Absent => return Err(ApiError::bad_request("Missing request body")),
        RequestPayload::Malformed => return Err(ApiError::bad_request("Invalid JSON body")),
    };

    request.admin_token = resolve_admin_token(&headers, request.admin_token.as_deref());

    let outcome = state.service.save(request).await?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(SaveResponse {
            success: true,
            id: outcome.id,
            updated_at: outcome.updated_at,
        }),
    ))
}
