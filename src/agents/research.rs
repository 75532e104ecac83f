// Agent 1: public-record research dossier.

use serde_json::{json, Value};
use tracing::info;

use super::context::build_context;
use super::state::AnalysisState;
use super::parse_agent_json;
use crate::llm::LlmGateway;
use crate::utils::text::clip;

const SYSTEM_PROMPT: &str =
    "You are a startup research analyst with encyclopaedic knowledge of tech, venture capital, and business history. \
     Your job is to produce a structured research dossier on a failed startup. \
     Gather everything publicly known: funding rounds, investors, team, press coverage, founder interviews, \
     community signals (Reddit, HN, Product Hunt), pivots, competitor landscape, and market conditions. \
     If little public data is available, set data_confidence to 'low' and note what is missing. \
     Return ONLY valid JSON with keys: name, founded, shutdown, funding, investors, category, market, \
     one_liner, what_they_built, press_coverage, founder_interviews, community_signals, pivots, \
     competitor_landscape, market_conditions, data_confidence (high/medium/low), public_data_available (bool).";

pub async fn run(llm: &LlmGateway, state: &mut AnalysisState) {
    info!(agent = "research", startup = %state.brief.startup_name, "building research dossier");

    let user_ctx: String = build_context(&state.brief);
    let raw: String = llm.complete(SYSTEM_PROMPT, &user_ctx).await;

    let data: Value = parse_agent_json(&raw).unwrap_or_else(|| {
        json!({
            "name": state.brief.startup_name,
            "one_liner": clip(&raw, 200),
            "data_confidence": "low",
            "public_data_available": false,
        })
    });

    let confidence: String = data
        .get("data_confidence")
        .and_then(Value::as_str)
        .unwrap_or("medium")
        .to_string();

    state.progress.push(format!(
        "✅ Research dossier built — confidence: {}",
        confidence.to_uppercase()
    ));
    state.data_confidence = confidence;
    state.research = data;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::state::FounderBrief;

    #[tokio::test]
    async fn dossier_lands_in_state_with_progress() {
        let llm: LlmGateway = LlmGateway::offline();
        let brief: FounderBrief = FounderBrief {
            startup_name: "Quibi".to_string(),
            year_founded: "2018".to_string(),
            year_shutdown: "2020".to_string(),
            ..Default::default()
        };
        let mut state: AnalysisState = AnalysisState::new(brief);

        run(&llm, &mut state).await;

        assert_eq!(state.research["name"], "Quibi");
        assert_eq!(state.data_confidence, "medium");
        assert_eq!(
            state.progress,
            vec!["✅ Research dossier built — confidence: MEDIUM".to_string()]
        );
    }
}
