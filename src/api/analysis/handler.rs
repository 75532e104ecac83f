// Analysis handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{info, instrument};

use crate::agents::state::{AnalysisReport, FounderBrief};
use crate::agents::run_analysis;
use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

/// Runs the five-agent pipeline over the submitted brief and caches the
/// finished report for previewing.
#[instrument(name = "analyse", skip(state, brief), fields(startup = %brief.startup_name))]
pub async fn analyse_handler(
    State(state): State<AppState>,
    Json(brief): Json<FounderBrief>,
) -> HandlerResponse {
    if brief.startup_name.trim().is_empty() {
        return HandlerResponse::new(StatusCode::BAD_REQUEST)
            .data(json!({ "error": "startup_name is required" }))
            .message("startup_name is required");
    }

    info!("Analysing failed startup: {}", brief.startup_name);

    let startup_name: String = brief.startup_name.clone();
    let report: AnalysisReport = run_analysis(&state.llm, brief).await;
    let report = state.reports.insert(&startup_name, report).await;

    HandlerResponse::new(StatusCode::OK)
        .data(json!(&*report))
        .message("Analysis complete")
}

/// Serves the cached marketing page for a previously analysed startup.
/// The page is a complete HTML document and bypasses the JSON envelope.
#[instrument(name = "preview", skip(state))]
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(startup_name): Path<String>,
) -> Response {
    match state.reports.get(&startup_name).await {
        Some(report) => Html(report.marketing_html.clone()).into_response(),
        None => HandlerResponse::new(StatusCode::NOT_FOUND)
            .data(json!({ "error": "Run /analyse first." }))
            .message("Run /analyse first.")
            .into_response(),
    }
}
