// Unified response system for consistent API responses
// Provides HandlerResponse struct and middleware for standardizing JSON
// responses. HTML pages and static assets pass through untouched.

use axum::{
    body::Body,
    http::{
        header::CONTENT_TYPE, response::Parts, Extensions, HeaderValue, Request, Response,
        StatusCode,
    },
    middleware::Next,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::convert::Infallible;
use tracing::{debug, error};

use crate::utils::json::to_two_space_indented_json;

/// Standard JSON response format for all API endpoints
#[derive(Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,        // HTTP status text (e.g. "OK", "NOT_FOUND")
    pub code: u16,             // HTTP status code
    pub data: Value,           // Response payload
    pub messages: Vec<String>, // Informational messages
    pub date: String,          // ISO timestamp
}

/// Convenience struct for building responses in handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub data: Value,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: Value::Null,
            messages: Vec::new(),
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Adds an informational message to the response
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = Json(json!({
            "data": self.data,
            "messages": self.messages
        }))
        .into_response();

        *response.status_mut() = self.status_code;

        // Store HandlerResponse in extensions for middleware processing
        response.extensions_mut().insert(self);
        response
    }
}

/// The landing page preview, the intake form and static assets already carry
/// their final body; everything JSON-ish (including bare layer-error strings
/// and the bodyless 404 fallback) gets the envelope.
fn is_passthrough(parts: &Parts) -> bool {
    let content_type: Option<&str> = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    match content_type {
        None => false,
        Some(ct) => !ct.starts_with("application/json") && !ct.starts_with("text/plain"),
    }
}

fn create_default_status_message(parts: &Parts) -> String {
    parts
        .status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_string()
}

/// Extracts response data and messages from HandlerResponse extensions
fn extract_response_components(response: &Response<Body>) -> (Vec<String>, Value) {
    let extensions: &Extensions = response.extensions();
    let structured_response: Option<&HandlerResponse> = extensions.get::<HandlerResponse>();

    match structured_response {
        Some(r) => (r.messages.clone(), r.data.clone()),
        None => (Vec::new(), Value::Null),
    }
}

/// Logs the formatted response with proper JSON indentation
fn log_wrapped_response(wrapped: &ResponseFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => debug!("\nFinal response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

/// Builds the final response with JSON content type
fn build_final_response(parts: Parts, wrapped: &ResponseFormat) -> Response<Body> {
    let json_body: Vec<u8> = serde_json::to_vec(wrapped).unwrap_or_else(|_| b"{}".to_vec());
    let mut new_parts: Parts = parts;

    new_parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    new_parts.headers.remove(axum::http::header::CONTENT_LENGTH);

    Response::from_parts(new_parts, Body::from(json_body))
}

/// Middleware that wraps JSON responses in the standard ResponseFormat structure
pub async fn response_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let response: Response<Body> = next.run(req).await;

    let (messages, data) = extract_response_components(&response);
    let (parts, body) = response.into_parts();

    if is_passthrough(&parts) {
        return Ok(Response::from_parts(parts, body));
    }

    let default_status: String = create_default_status_message(&parts);
    let formatted_status: String = default_status.to_uppercase().replace(' ', "_");

    let wrapped: ResponseFormat = ResponseFormat {
        status: formatted_status,
        code: parts.status.as_u16(),
        data,
        messages,
        date: Utc::now().to_rfc3339(),
    };

    log_wrapped_response(&wrapped);

    Ok(build_final_response(parts, &wrapped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts_with_content_type(content_type: Option<&'static str>) -> Parts {
        let mut builder = Response::builder().status(StatusCode::OK);
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn html_and_assets_pass_through() {
        assert!(is_passthrough(&parts_with_content_type(Some(
            "text/html; charset=utf-8"
        ))));
        assert!(is_passthrough(&parts_with_content_type(Some("text/css"))));
    }

    #[test]
    fn json_plain_and_bodyless_responses_get_wrapped() {
        assert!(!is_passthrough(&parts_with_content_type(Some(
            "application/json"
        ))));
        assert!(!is_passthrough(&parts_with_content_type(Some(
            "text/plain; charset=utf-8"
        ))));
        assert!(!is_passthrough(&parts_with_content_type(None)));
    }

    #[test]
    fn status_text_is_upper_snake() {
        let (parts, _) = Response::builder()
            .status(StatusCode::PAYLOAD_TOO_LARGE)
            .body(())
            .unwrap()
            .into_parts();
        let formatted: String = create_default_status_message(&parts)
            .to_uppercase()
            .replace(' ', "_");
        assert_eq!(formatted, "PAYLOAD_TOO_LARGE");
    }
}
