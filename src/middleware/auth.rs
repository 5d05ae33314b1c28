use axum::http::{header::AUTHORIZATION, HeaderMap};
use serde::{de::DeserializeOwned, Deserialize};

use crate::auth::normalize_admin_token;

/// Outcome of reading an optional JSON request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPayload<T> {
    Present(T),
    /// Empty or whitespace-only body
    Absent,
    /// Body was sent but is not the expected JSON
    Malformed,
}

impl<T> RequestPayload<T> {
    pub fn present(self) -> Option<T> {
        match self {
            RequestPayload::Present(value) => Some(value),
            RequestPayload::Absent | RequestPayload::Malformed => None,
        }
    }
}

/// Parse a request body without treating absence or bad JSON as a fault
pub fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> RequestPayload<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return RequestPayload::Absent;
    }

    match serde_json::from_slice(body) {
        Ok(value) => RequestPayload::Present(value),
        Err(e) => {
            tracing::debug!("Ignoring malformed request body: {}", e);
            RequestPayload::Malformed
        }
    }
}

/// Body fields that may carry the admin token
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTokenBody {
    pub admin_token: Option<String>,
}

/// Extract a bearer token from the Authorization header.
///
/// Returns `None` when the header is missing, not UTF-8, uses another scheme
/// or carries an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = auth_str.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    non_empty(token)
}

/// Resolve the admin token for a mutating request.
///
/// A well-formed bearer header takes precedence; otherwise the body's
/// `adminToken` field is used.
pub fn resolve_admin_token(headers: &HeaderMap, body_token: Option<&str>) -> Option<String> {
    extract_bearer_token(headers).or_else(|| body_token.and_then(non_empty))
}

fn non_empty(token: &str) -> Option<String> {
    normalize_admin_token(token).map(str::to_string)
}
