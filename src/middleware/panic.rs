use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::error::ApiError;

/// Turn a handler panic into the standard `{error}` 500 body.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!("Request handler panicked: {}", detail);
    ApiError::internal_server_error("Internal server error").into_response()
}
