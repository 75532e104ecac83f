//! tests/analysis/health.rs
//! The liveness endpoint reports ok inside the standard envelope.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_reports_ok() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    let envelope: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(envelope["status"], "OK");
    assert_eq!(envelope["code"], 200);
    assert_eq!(envelope["data"]["status"], "ok");
    assert!(envelope["date"].is_string());
}
