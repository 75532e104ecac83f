// Pipeline state: the founder's intake form, the working analysis, and the
// finished report.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The founder's intake form, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FounderBrief {
    // Stage 1 — identity
    pub startup_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub year_founded: String,
    #[serde(default)]
    pub year_shutdown: String,
    #[serde(default)]
    pub funding_range: String,
    #[serde(default)]
    pub product_description: String,

    // Stage 2 — founder's perspective, optional
    #[serde(default)]
    pub startup_overview: String,
    #[serde(default)]
    pub why_failed_shutdown: String,
    #[serde(default)]
    pub founder_why_failed: String,
    #[serde(default)]
    pub customer_feedback: String,
    #[serde(default)]
    pub pivots_tried: String,
    #[serde(default)]
    pub what_different: String,

    // Stage 3 — context signal checkboxes
    #[serde(default)]
    pub context_signals: Vec<String>,
}

/// Mutable working state threaded through the agents in order.
#[derive(Debug)]
pub struct AnalysisState {
    pub brief: FounderBrief,
    pub research: Value,
    pub autopsy: Value,
    pub revival: Value,
    pub copywriter_outputs: Value,
    pub marketing_html: String,
    pub progress: Vec<String>,
    pub data_confidence: String,
}

impl AnalysisState {
    pub fn new(brief: FounderBrief) -> Self {
        Self {
            brief,
            research: json!({}),
            autopsy: json!({}),
            revival: json!({}),
            copywriter_outputs: json!({}),
            marketing_html: String::new(),
            progress: Vec::new(),
            data_confidence: "medium".to_string(),
        }
    }

    pub fn into_report(self) -> AnalysisReport {
        AnalysisReport {
            startup_name: self.brief.startup_name,
            research: self.research,
            autopsy: self.autopsy,
            revival: self.revival,
            copywriter_outputs: self.copywriter_outputs,
            marketing_html: self.marketing_html,
            progress: self.progress,
            data_confidence: self.data_confidence,
        }
    }
}

/// The finished analysis, returned by the API and kept for previews.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub startup_name: String,
    pub research: Value,
    pub autopsy: Value,
    pub revival: Value,
    pub copywriter_outputs: Value,
    pub marketing_html: String,
    pub progress: Vec<String>,
    pub data_confidence: String,
}
