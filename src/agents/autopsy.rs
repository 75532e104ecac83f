// Agent 2: six-lens failure autopsy.

use serde_json::{json, Value};
use tracing::info;

use super::context::build_context;
use super::state::AnalysisState;
use super::parse_agent_json;
use crate::llm::LlmGateway;
use crate::utils::json::to_two_space_indented_json;
use crate::utils::text::clip;

const SYSTEM_PROMPT: &str =
    "You are the world's most ruthless startup post-mortem analyst. \
     Analyse this startup's failure across exactly six dimensions with specific, evidence-backed reasoning. \
     Be harsh, honest, and specific — not generic. This is the honest advisor the founder never had. \
     Return ONLY valid JSON with keys: \
     primary_failure_hypothesis (one clear sentence — the single most important reason), \
     overall_score (0–100 survival score, most failures score under 30), \
     data_note (string, empty if data was sufficient), \
     timing {rating, finding, evidence}, \
     market_size_monetization {rating, finding, evidence}, \
     pmf {rating, finding, evidence}, \
     team_execution {rating, finding, evidence}, \
     competition_defensibility {rating, finding, evidence}, \
     external_factors {rating, finding, evidence}. \
     Ratings: Critical / Significant / Minor / Not a factor.";

const LOW_DATA_NOTE: &str = "\nNOTE: Limited public data is available for this startup. \
     Be explicit about what you are inferring vs. what you found directly. \
     Lean heavily on the founder's own inputs where public data is sparse.";

pub async fn run(llm: &LlmGateway, state: &mut AnalysisState) {
    info!(agent = "autopsy", startup = %state.brief.startup_name, "running failure autopsy");

    let research_ctx: String = to_two_space_indented_json(&state.research)
        .unwrap_or_else(|_| state.research.to_string());
    let user_ctx: String = build_context(&state.brief);

    let mut system: String = SYSTEM_PROMPT.to_string();
    if state.data_confidence == "low" {
        system.push_str(LOW_DATA_NOTE);
    }

    let user: String = format!(
        "startup_name: \"{}\"\n\nResearch dossier:\n{}\n\nFounder inputs:\n{}",
        state.brief.startup_name, research_ctx, user_ctx
    );

    let raw: String = llm.complete(&system, &user).await;
    let data: Value = parse_agent_json(&raw).unwrap_or_else(|| {
        json!({
            "primary_failure_hypothesis": clip(&raw, 300),
            "overall_score": 15,
        })
    });

    state
        .progress
        .push("✅ Autopsy complete — 6-lens failure analysis done".to_string());
    state.autopsy = data;
}
