pub mod auth;
pub mod panic;

pub use auth::{extract_bearer_token, parse_payload, resolve_admin_token, AdminTokenBody, RequestPayload};
pub use panic::handle_panic;
