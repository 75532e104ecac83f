// Monitoring handlers

use axum::http::StatusCode;
use serde_json::json;

use crate::utils::response_handler::HandlerResponse;

/// Liveness probe used by the container healthcheck.
pub async fn health_handler() -> HandlerResponse {
    HandlerResponse::new(StatusCode::OK).data(json!({ "status": "ok" }))
}
