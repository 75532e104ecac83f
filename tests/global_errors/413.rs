//! tests/global_errors/413.rs
//! Ensures that sending a large payload (> 2MB by default) triggers 413.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app();

    // A syntactically valid brief slightly larger than the 2MB cap.
    let oversized_description: String = "X".repeat(2_097_152 + 100);
    let payload: String = format!(
        r#"{{"startup_name":"Heavy","product_description":"{}"}}"#,
        oversized_description
    );

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/analyse", base_url))
        .header("content-type", "application/json")
        .body(payload)
        .send()
        .await
        .expect("Failed to send large request.");

    // Expect a 413 Payload Too Large response.
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["code"], 413);
}
