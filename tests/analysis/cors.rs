//! tests/analysis/cors.rs
//! Cross-origin browser requests are allowed from any origin.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn preflight_allows_any_origin() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/analyse", base_url))
        .header("Origin", "https://founder-tools.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");

    let allowed: &str = resp.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap();
    assert!(allowed.contains("POST"));
}

#[tokio::test]
async fn simple_requests_carry_the_allow_origin_header() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/health", base_url))
        .header("Origin", "https://founder-tools.example")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
