//! tests/analysis/preview.rs
//! The preview endpoint replays cached landing pages as raw HTML.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn preview_before_analysis_is_a_404() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/preview/Ghost", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: String = resp.text().await.unwrap();
    let envelope: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(envelope["status"], "NOT_FOUND");
    assert_eq!(envelope["messages"][0], "Run /analyse first.");
}

#[tokio::test]
async fn preview_after_analysis_returns_raw_html() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    let resp: reqwest::Response = client
        .post(format!("{}/analyse", base_url))
        .json(&json!({ "startup_name": "Vine" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(resp.status(), StatusCode::OK);

    // Lookup is case-insensitive: cache keys are trimmed and lowercased.
    let resp: reqwest::Response = client
        .get(format!("{}/preview/VINE", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let content_type: &str = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("text/html"));

    // The raw page, not the JSON envelope.
    let body: String = resp.text().await.unwrap();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Vine"));
}
