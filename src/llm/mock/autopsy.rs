// Offline six-lens failure autopsy, calibrated from the brief's context signals.

use serde_json::{json, Value};

use super::context::MockContext;
use crate::utils::text::clip;

pub(super) fn report(ctx: &MockContext) -> Value {
    let name: &str = &ctx.name;
    let founded: &str = &ctx.founded;
    let shutdown: &str = &ctx.shutdown;
    let funding: &str = &ctx.funding;
    let category: &str = &ctx.category;
    let active_str: &str = &ctx.active_str;
    let signals_lc: String = ctx.signals_joined_lower();

    let timing_r: String = ctx.signal_rating(&["too early", "lockdown", "pandemic"], "Significant");
    let market_r: String = ctx.signal_rating(&["wrong pricing", "ran out of money"], "Significant");
    let pmf_r: String =
        ctx.signal_rating(&["growth stalled", "product was never finished"], "Significant");
    let team_r: String = ctx.signal_rating(
        &["team fell apart", "ran out of money", "product was never finished"],
        "Significant",
    );
    let comp_r: String = ctx.signal_rating(&["larger competitor"], "Minor");
    let extern_r: String = ctx.signal_rating(&["regulation", "lockdown"], "Minor");

    let timing_market: &str = if timing_r == "Critical" {
        "still maturing, making customer education expensive and sales cycles long"
    } else {
        "competitive but addressable with the right positioning"
    };
    let timing_evidence: &str = if timing_r == "Critical" {
        "Founder noted market timing as a factor."
    } else {
        "No specific timing crisis was flagged in available signals."
    };
    let market_evidence: &str = if market_r == "Critical" {
        "Founder cited pricing/monetisation as a challenge."
    } else {
        "No confirmed ARR or revenue milestones were publicly disclosed."
    };
    let pmf_trajectory: &str = if pmf_r == "Significant" {
        "showed initial traction but failed to retain customers at the rate needed to justify continued investment"
    } else {
        "struggled from the outset to demonstrate consistent, organic customer pull"
    };
    let pmf_evidence: &str = if signals_lc.contains("growth stalled") {
        "Growth stalled after initial traction — a classic late-stage PMF failure signal."
    } else {
        "No public retention or engagement metrics confirm sustained PMF."
    };
    let team_finding: String = if team_r == "Critical" {
        "The team fell apart before the company could recover — a critical execution failure \
         that compounded every other problem."
            .to_string()
    } else {
        format!(
            "{name} faced execution challenges common to startups in the {category} space: \
             hiring the right talent, managing burn, and pivoting quickly enough to stay ahead of market feedback."
        )
    };
    let team_evidence: String = if signals_lc.contains("team fell apart") {
        "Team fragmentation explicitly cited as a failure factor.".to_string()
    } else {
        format!(
            "No public founder conflict data available for {name}. \
             Shutdown timeline implies execution gaps went unresolved for too long."
        )
    };
    let comp_finding: String = if comp_r == "Critical" {
        format!(
            "A larger competitor moved into the space and commoditised the core value proposition \
             before {name} could build sufficient defensibility."
        )
    } else {
        format!(
            "The {category} space in which {name} competed became increasingly crowded \
             between {founded} and {shutdown}."
        )
    };
    let comp_evidence: String = if comp_r == "Critical" {
        "Competitor copying explicitly cited as a factor.".to_string()
    } else {
        format!(
            "Standard competitive pressure in the {category} market during {founded}–{shutdown}. \
             No specific copycat event was flagged in available signals."
        )
    };
    let extern_finding: String = if extern_r == "Critical" {
        "Regulatory intervention was cited as a direct blocker — an external factor largely \
         outside the team's control."
            .to_string()
    } else {
        format!("No catastrophic external event appears to have been the primary cause of {name}'s failure.")
    };
    let extern_evidence: &str = if extern_r == "Critical" {
        "Regulation explicitly cited as a blocking factor."
    } else {
        "No confirmed regulatory, pandemic, or macro event was the proximate cause of the shutdown."
    };

    json!({
        "primary_failure_hypothesis": format!(
            "{name} failed to achieve product-market fit within its {active_str} lifespan — \
             spending {funding} without validating a sustainable path to growth, \
             and ultimately shutting down when the gap between capital efficiency and market demand became insurmountable."
        ),
        "overall_score": 22,
        "data_note": format!(
            "Analysis is partially inferred from founder-provided context and publicly available signals. \
             Direct metrics (churn, NPS, revenue) were not publicly disclosed by {name}."
        ),
        "timing": {
            "rating": timing_r,
            "finding": format!(
                "{name} operated from {founded} to {shutdown}. \
                 The {category} market during this window was {timing_market}. \
                 The timing of the shutdown in {shutdown} suggests the team ran out of time before the market came to them."
            ),
            "evidence": format!(
                "Active from {founded}–{shutdown} ({active_str}). \
                 Funding of {funding} was not sufficient to outlast the market timing gap. {timing_evidence}"
            ),
        },
        "market_size_monetization": {
            "rating": market_r,
            "finding": format!(
                "The monetisation model for {name}'s {category} product was never definitively validated at scale. \
                 With {funding} raised, the path to a unit-economics-positive business required either a larger TAM \
                 than the market supported or a pricing model that customers consistently accepted."
            ),
            "evidence": format!(
                "Funding of {funding} is consistent with a seed/Series A stage company that had not yet demonstrated \
                 repeatable revenue. {market_evidence}"
            ),
        },
        "pmf": {
            "rating": pmf_r,
            "finding": format!(
                "{name}'s core product — {} — {pmf_trajectory}. \
                 The gap between early adopter enthusiasm and mainstream adoption was never bridged.",
                clip(&ctx.desc, 120)
            ),
            "evidence": format!(
                "Shutdown in {shutdown} without a successful exit or acqui-hire strongly implies PMF was not achieved. \
                 {pmf_evidence}"
            ),
        },
        "team_execution": {
            "rating": team_r,
            "finding": format!(
                "{team_finding}  \
                 The {active_str} window suggests the team had time to attempt corrections but could not find the right formula."
            ),
            "evidence": team_evidence,
        },
        "competition_defensibility": {
            "rating": comp_r,
            "finding": format!(
                "{comp_finding}  \
                 Without a clear moat — proprietary data, network effects, or switching costs — \
                 {name} was vulnerable to better-funded competitors replicating its core features."
            ),
            "evidence": comp_evidence,
        },
        "external_factors": {
            "rating": extern_r,
            "finding": format!(
                "{extern_finding}  \
                 However, macro conditions during {founded}–{shutdown} (funding environment, market sentiment in the {category} sector) \
                 may have reduced the window for recovery."
            ),
            "evidence": extern_evidence,
        },
    })
}
