// handlers/tournament/delete.rs - DELETE /tournament/:id handler

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::HeaderMap,
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::{parse_payload, resolve_admin_token, AdminTokenBody, RequestPayload};

/// Token comes from `Authorization: Bearer` or the body's `adminToken`.
/// An empty, unparsable or oversized body simply means "no token in the body".
pub async fn tournament_delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = path.map_err(|_| ApiError::bad_request("Invalid tournament id"))?;

    let payload = match body {
        Ok(body) => parse_payload::<AdminTokenBody>(&body),
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable delete body: {}", rejection.body_text());
            RequestPayload::Absent
        }
    };
    let body_token = payload.present().and_then(|b| b.admin_token);
    let token = resolve_admin_token(&headers, body_token.as_deref());

    state.service.delete(&id, token.as_deref()).await?;
    Ok(Json(json!({ "success": true })))
}
