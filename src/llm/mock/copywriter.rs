// Offline copywriter outputs: summary card, revival pitch, elevator pitch.

use serde_json::{json, Value};

use super::context::MockContext;
use super::current_year;
use crate::utils::text::ellipsize;

pub(super) fn outputs(ctx: &MockContext) -> Value {
    let name: &str = &ctx.name;
    let shutdown: &str = &ctx.shutdown;
    let funding: &str = &ctx.funding;
    let category: &str = &ctx.category;
    let market: &str = &ctx.market;
    let desc: &str = &ctx.desc;
    let active_str: &str = &ctx.active_str;
    let cur_year: i32 = current_year();

    let quote_body: String = if ctx.why_failed.chars().count() > 120 {
        ellipsize(&ctx.why_failed, 120)
    } else if !ctx.why_failed.is_empty() {
        ctx.why_failed.clone()
    } else {
        "We had the right problem. We had the wrong solution.".to_string()
    };

    json!({
        "autopsy_summary_card": {
            "headline": format!("How {name} Failed in {active_str}"),
            "primary_hypothesis": format!(
                "{name} raised {funding} but couldn't find a sustainable business model in the {category} space \
                 before the runway ran out — a failure of validation speed, not vision."
            ),
            "top_3_factors": [
                "Failed to achieve product-market fit before capital was exhausted".to_string(),
                format!("Operated in a {category} market with strong, often better-funded competitors"),
                "Pivoted too late or not enough to find a wedge that customers would pay for".to_string(),
            ],
            "killer_quote": format!("\"{quote_body}\" — {name} founder perspective"),
        },
        "revival_pitch": {
            "problem": format!(
                "{desc} — this problem is real and still largely unsolved. \
                 The original {name} approach was expensive, under-validated, and vulnerable to better-funded competitors. \
                 Customers in the {category} space are still searching for a purpose-built solution that the market hasn't delivered."
            ),
            "solution": format!(
                "{name} ({cur_year}): same core insight, completely rebuilt execution. \
                 We start with 10 paying customers and a concierge MVP before writing a line of scalable code. \
                 Post-2023 AI infrastructure cuts build cost by 60–80%, meaning we can validate in 90 days \
                 what the original took {active_str} to attempt."
            ),
            "market": format!(
                "The {category} market in {market} has grown and matured since {shutdown}. \
                 Buyer education costs are lower, infrastructure is commoditised, and the timing window that \
                 worked against {name} may now be firmly in our favour. \
                 The {cur_year} market is fundamentally different from the one that rejected the original."
            ),
            "why_now": format!(
                "Three forces converge in {cur_year}: (1) AI tooling cuts the cost of building in {category} by 60–80%; \
                 (2) the {category} market has matured — customers are more educated and infrastructure is cheaper; \
                 (3) the lessons from {name}'s failure are now a blueprint, not a scar. \
                 What required {funding} and {active_str} to attempt can now be validated for under $500K in 90 days."
            ),
            "ask": format!(
                "Raising $1.5M pre-seed to reach 25 paying customers and $500K ARR within 12 months. \
                 {name} spent {funding} proving the problem is real. \
                 We're spending $1.5M proving we can own the solution — with a 90-day concierge validation \
                 before a single line of scalable code is written."
            ),
        },
        "elevator_pitch": format!(
            "{name} ({cur_year}) is a lean revival of the original {name} — {} — \
             rebuilt with every lesson from the original failure baked into the founding thesis. \
             The original spent {funding} on the wrong execution; we're spending $1.5M on the right one, \
             starting with 10 paying customers before we write a line of scalable code.",
            ellipsize(desc, 90)
        ),
    })
}
