// The analysis pipeline: five agents run in sequence over shared state.
//
//   research → autopsy → revival → copywriter → marketing
//
// Stages never fail the request; a reply that cannot be parsed degrades to a
// stage-specific fallback object.

pub mod autopsy;
pub mod context;
pub mod copywriter;
pub mod marketing;
pub mod research;
pub mod revival;
pub mod state;

use serde_json::Value;

use crate::llm::LlmGateway;
use crate::utils::json::extract_json_object;
use state::{AnalysisReport, AnalysisState, FounderBrief};

/// Runs the full pipeline for one founder brief.
pub async fn run_analysis(llm: &LlmGateway, brief: FounderBrief) -> AnalysisReport {
    let mut state: AnalysisState = AnalysisState::new(brief);

    research::run(llm, &mut state).await;
    autopsy::run(llm, &mut state).await;
    revival::run(llm, &mut state).await;
    copywriter::run(llm, &mut state).await;
    marketing::run(&mut state);

    state.into_report()
}

/// Parses an agent reply into JSON, digging the object out of any prose
/// around it.
pub(crate) fn parse_agent_json(raw: &str) -> Option<Value> {
    serde_json::from_str(extract_json_object(raw)).ok()
}
