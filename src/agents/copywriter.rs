// Agent 4: copywriter outputs for the revived startup.

use serde_json::{json, Value};
use tracing::info;

use super::state::AnalysisState;
use super::parse_agent_json;
use crate::llm::LlmGateway;
use crate::utils::json::to_two_space_indented_json;
use crate::utils::text::clip;

const SYSTEM_PROMPT: &str =
    "You are an elite startup copywriter — YC Demo Day meets Stripe's homepage. \
     Produce exactly three polished outputs for the revived startup. \
     Write in the voice of a confident founder, not an AI. Be punchy and specific. \
     Return ONLY valid JSON with keys: \
     autopsy_summary_card { headline, primary_hypothesis, top_3_factors (array), killer_quote }, \
     revival_pitch { problem, solution, market, why_now, ask }, \
     elevator_pitch (string — exactly 3 sentences: what it does, who it's for, why it wins this time).";

const NO_FOUNDER_NOTE: &str =
    "\nNote: No founder perspective was provided — keep the revival pitch founder-agnostic.";

pub async fn run(llm: &LlmGateway, state: &mut AnalysisState) {
    info!(agent = "copywriter", startup = %state.brief.startup_name, "writing launch copy");

    let context: String = to_two_space_indented_json(&json!({
        "research": state.research,
        "autopsy": state.autopsy,
        "revival": state.revival,
    }))
    .unwrap_or_else(|_| "{}".to_string());

    let founder_provided: bool =
        !state.brief.founder_why_failed.is_empty() || !state.brief.what_different.is_empty();

    let mut system: String = SYSTEM_PROMPT.to_string();
    if !founder_provided {
        system.push_str(NO_FOUNDER_NOTE);
    }

    let user: String = format!(
        "startup_name: \"{}\"\n\nFull context:\n{}",
        state.brief.startup_name, context
    );

    let raw: String = llm.complete(&system, &user).await;
    let data: Value =
        parse_agent_json(&raw).unwrap_or_else(|| json!({ "elevator_pitch": clip(&raw, 300) }));

    state
        .progress
        .push("✅ Copy written — summary card, pitch & elevator ready".to_string());
    state.copywriter_outputs = data;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::state::FounderBrief;

    #[tokio::test]
    async fn copy_lands_with_all_three_outputs() {
        let llm: LlmGateway = LlmGateway::offline();
        let brief: FounderBrief = FounderBrief {
            startup_name: "Quibi".to_string(),
            ..Default::default()
        };
        let mut state: AnalysisState = AnalysisState::new(brief);

        run(&llm, &mut state).await;

        assert!(state.copywriter_outputs.get("autopsy_summary_card").is_some());
        assert!(state.copywriter_outputs.get("revival_pitch").is_some());
        assert!(state.copywriter_outputs.get("elevator_pitch").is_some());
        assert_eq!(
            state.progress,
            vec!["✅ Copy written — summary card, pitch & elevator ready".to_string()]
        );
    }
}
