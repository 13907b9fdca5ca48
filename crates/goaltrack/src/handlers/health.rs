//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check the server is accepting
/// connections; performs no storage access.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
