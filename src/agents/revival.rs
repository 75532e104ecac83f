// Agent 3: revival strategy.

use chrono::{Datelike, Utc};
use serde_json::{json, Value};
use tracing::info;

use super::state::AnalysisState;
use super::parse_agent_json;
use crate::llm::LlmGateway;
use crate::utils::json::to_two_space_indented_json;
use crate::utils::text::clip;

const RESPONSE_KEYS: &str =
    "Return ONLY valid JSON with keys: \
     core_insight (the genuine good idea buried in the failure), \
     revised_name, revised_icp, repositioning_statement (corrects original positioning mistakes), \
     gtm_strategy { primary_channel, why_channel, 90_day_plan (array of {week, action}), \
     what_not_to_do (array of strings), pricing_model }, \
     competitive_landscape_today (has the space changed since failure?), \
     risk_register (array of {risk, mitigation} — top 3 only).";

pub async fn run(llm: &LlmGateway, state: &mut AnalysisState) {
    info!(agent = "revival", startup = %state.brief.startup_name, "designing revival strategy");

    let context: String = to_two_space_indented_json(&json!({
        "research": state.research,
        "autopsy": state.autopsy,
        "founder_inputs": {
            "why_failed": state.brief.founder_why_failed,
            "customer_feedback": state.brief.customer_feedback,
            "pivots_tried": state.brief.pivots_tried,
            "what_different": state.brief.what_different,
            "context_signals": state.brief.context_signals,
        },
    }))
    .unwrap_or_else(|_| "{}".to_string());

    let system: String = format!(
        "You are a world-class startup strategist and relaunch specialist. \
         Given this failed startup's full autopsy, design what it would look like relaunched in {} \
         with every lesson baked in. Be specific, opinionated, and actionable — not generic. {RESPONSE_KEYS}",
        Utc::now().year()
    );
    let user: String = format!(
        "startup_name: \"{}\"\n\nFull context:\n{}\n\nBuild the definitive 2025 revival strategy.",
        state.brief.startup_name, context
    );

    let raw: String = llm.complete(&system, &user).await;
    let data: Value =
        parse_agent_json(&raw).unwrap_or_else(|| json!({ "core_insight": clip(&raw, 300) }));

    state
        .progress
        .push("✅ Revival strategy built — GTM, ICP, risk register ready".to_string());
    state.revival = data;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::state::FounderBrief;

    #[tokio::test]
    async fn strategy_carries_the_gtm_plan() {
        let llm: LlmGateway = LlmGateway::offline();
        let brief: FounderBrief = FounderBrief {
            startup_name: "Quibi".to_string(),
            industry: "Consumer Video".to_string(),
            ..Default::default()
        };
        let mut state: AnalysisState = AnalysisState::new(brief);

        run(&llm, &mut state).await;

        assert!(state.revival["core_insight"].as_str().is_some());
        assert_eq!(
            state.revival["gtm_strategy"]["90_day_plan"].as_array().map(Vec::len),
            Some(6)
        );
        assert_eq!(
            state.progress,
            vec!["✅ Revival strategy built — GTM, ICP, risk register ready".to_string()]
        );
    }
}
