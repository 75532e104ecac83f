// Global error handling for HTTP middleware layers

use axum::{http::StatusCode, response::IntoResponse, BoxError};
use http_body_util::LengthLimitError;
use std::error::Error;
use tower::timeout::error::Elapsed;
use tracing::error;

/// Maps errors escaping the layer stack to appropriate HTTP responses.
/// Handlers never reach this path; only the body cap and the request
/// timeout produce layer errors in this service.
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 413 if the body was too large
    if find_cause::<LengthLimitError>(&*err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    error!("Unhandled layer error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Walks the source chain looking for a concrete error type.
fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(cause) = source {
        if let Some(typed) = cause.downcast_ref::<T>() {
            return Some(typed);
        }
        source = cause.source();
    }

    None
}
