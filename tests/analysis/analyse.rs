//! tests/analysis/analyse.rs
//! Exercises POST /analyse end to end: the full offline pipeline, then
//! the validation failures around startup_name.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn analyse_returns_the_full_report_envelope() {
    let base_url: String = common::spawn_app();

    let brief: Value = json!({
        "startup_name": "Quibi",
        "industry": "Mobile streaming",
        "country": "United States",
        "year_founded": "2018",
        "year_shutdown": "2020",
        "funding_range": "$1.75B",
        "product_description": "Short-form premium video made for phones",
        "why_failed_shutdown": "Subscriptions collapsed right after the free trials ended",
        "context_signals": ["Pandemic lockdowns crushed demand"]
    });

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/analyse", base_url))
        .json(&brief)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    let envelope: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(envelope["status"], "OK");
    assert_eq!(envelope["code"], 200);
    assert_eq!(envelope["messages"][0], "Analysis complete");

    let report: &Value = &envelope["data"];
    assert_eq!(report["startup_name"], "Quibi");
    assert_eq!(report["data_confidence"], "medium");

    // Five pipeline stages, each reporting progress in order.
    let progress: &Vec<Value> = report["progress"].as_array().unwrap();
    assert_eq!(progress.len(), 5);
    assert_eq!(progress[0], "✅ Research dossier built — confidence: MEDIUM");
    assert_eq!(progress[4], "✅ Marketing landing page generated");

    assert_eq!(report["research"]["name"], "Quibi");
    assert_eq!(report["autopsy"]["overall_score"], 22);
    assert_eq!(report["autopsy"]["timing"]["rating"], "Significant");
    assert!(report["revival"]["gtm_strategy"]["90_day_plan"].is_array());

    let html: &str = report["marketing_html"].as_str().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("relaunch.ai"));
    assert!(html.contains("Survival Score: 22/100"));
}

#[tokio::test]
async fn analyse_rejects_blank_startup_names() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/analyse", base_url))
        .json(&json!({ "startup_name": "   " }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: String = resp.text().await.unwrap();
    let envelope: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(envelope["status"], "BAD_REQUEST");
    assert_eq!(envelope["code"], 400);
    assert_eq!(envelope["messages"][0], "startup_name is required");
    assert_eq!(envelope["data"]["error"], "startup_name is required");
}

#[tokio::test]
async fn analyse_rejects_briefs_without_a_name_field() {
    let base_url: String = common::spawn_app();

    // startup_name has no default, so deserialization fails.
    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/analyse", base_url))
        .json(&json!({ "industry": "Mobile streaming" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: String = resp.text().await.unwrap();
    let envelope: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(envelope["status"], "UNPROCESSABLE_ENTITY");
    assert_eq!(envelope["code"], 422);
}
