// Founder-context block shared by the research and autopsy prompts.

use super::state::FounderBrief;

/// Flattens the brief into labelled lines for agent consumption. Optional
/// sections appear only when the founder filled them in.
pub fn build_context(brief: &FounderBrief) -> String {
    let mut parts: Vec<String> = vec![
        format!("Startup: {}", brief.startup_name),
        format!("Industry: {}", brief.industry),
        format!("Market: {}", brief.country),
        format!("Active: {} → {}", brief.year_founded, brief.year_shutdown),
        format!("Funding: {}", brief.funding_range),
        format!("What it did: {}", brief.product_description),
    ];

    if !brief.startup_overview.is_empty() {
        parts.push(format!(
            "Founder's description of the startup: {}",
            brief.startup_overview
        ));
    }
    if !brief.why_failed_shutdown.is_empty() {
        parts.push(format!(
            "Why it failed and shut down (founder's account): {}",
            brief.why_failed_shutdown
        ));
    }
    if !brief.founder_why_failed.is_empty() {
        parts.push(format!("Founder's view on failure: {}", brief.founder_why_failed));
    }
    if !brief.customer_feedback.is_empty() {
        parts.push(format!("Customer feedback: {}", brief.customer_feedback));
    }
    if !brief.pivots_tried.is_empty() {
        parts.push(format!("Pivots attempted: {}", brief.pivots_tried));
    }
    if !brief.what_different.is_empty() {
        parts.push(format!("What they'd do differently: {}", brief.what_different));
    }
    if !brief.context_signals.is_empty() {
        parts.push(format!(
            "Known failure signals: {}",
            brief.context_signals.join(", ")
        ));
    }

    parts.join("\n")
}
