// Offline revival strategy builder.

use serde_json::{json, Value};

use super::context::MockContext;
use super::current_year;
use crate::utils::text::clip;

pub(super) fn strategy(ctx: &MockContext) -> Value {
    let name: &str = &ctx.name;
    let shutdown: &str = &ctx.shutdown;
    let funding: &str = &ctx.funding;
    let category: &str = &ctx.category;
    let market: &str = &ctx.market;
    let cur_year: i32 = current_year();

    json!({
        "core_insight": format!(
            "The problem {name} was trying to solve — {} — \
             is likely still real and still unsolved. \
             The failure was in execution, timing, and business model, not in the underlying need.",
            clip(&ctx.desc, 100)
        ),
        "revised_name": format!("{name} ({cur_year})"),
        "revised_icp": format!(
            "Early adopters and power users in the {category} space who have already demonstrated \
             willingness to pay for solutions to the problem {name} was solving — \
             specifically in the {market} market, where the timing may now be more favourable."
        ),
        "repositioning_statement": format!(
            "The new {name}: same insight, leaner model, built in public with customers from day one."
        ),
        "gtm_strategy": {
            "primary_channel": format!(
                "Direct outreach to the top 50 potential customers in the {category} space \
                 who experienced the problem firsthand"
            ),
            "why_channel": format!(
                "The fastest path to PMF validation is talking directly to people who already feel the pain. \
                 In the {category} space, these customers are identifiable and reachable without paid acquisition. \
                 Revenue from 10 paying customers is worth more than 10,000 free signups at this stage."
            ),
            "90_day_plan": [
                {
                    "week": "1–2",
                    "action": format!(
                        "Interview 20 potential customers who experienced the exact problem {name} was solving. \
                         Record every session. Document the precise language they use — this becomes your copy and positioning."
                    ),
                },
                {
                    "week": "3–4",
                    "action": "Build a concierge MVP — solve the problem manually for 3–5 paying customers \
                               before writing a line of code. Charge real money from day one. \
                               Willingness to pay is the only signal that matters at this stage.",
                },
                {
                    "week": "5–6",
                    "action": format!(
                        "Scope the minimum product required to serve those 3–5 customers better than any \
                         existing alternative in the {category} space. Build only that feature set — nothing else."
                    ),
                },
                {
                    "week": "7–8",
                    "action": format!(
                        "Expand to 10–15 paying customers in the {market} market. Instrument weekly NPS, churn, \
                         and expansion revenue. If NPS < 40, do not expand further — fix the product first."
                    ),
                },
                {
                    "week": "9–10",
                    "action": format!(
                        "Study the {category} competitors identified in the research dossier. Map exactly what \
                         they do better. Build a clear answer to the question: \
                         'Why would a customer choose us over them today?'"
                    ),
                },
                {
                    "week": "11–12",
                    "action": format!(
                        "With 15+ paying customers, positive NPS, and a clear competitive answer, approach \
                         3 angels or pre-seed funds: '{name} failed because of X. We solved X. \
                         Here is the proof — 15 paying customers in 90 days.'"
                    ),
                },
            ],
            "what_not_to_do": [
                "Do NOT raise more than $500K before achieving 10 paying customers — \
                 runway should buy validation, not headcount."
                    .to_string(),
                format!(
                    "Do NOT rebuild the original {name} product feature-for-feature. \
                     Start with the core insight only."
                ),
                "Do NOT hire a sales team before you have a repeatable, founder-led sales motion.".to_string(),
                format!(
                    "Do NOT ignore the reasons {name} failed — run the autopsy findings as a checklist every 30 days."
                ),
                "Do NOT optimise for press coverage before achieving PMF. \
                 Stay in stealth until the product speaks for itself."
                    .to_string(),
            ],
            "pricing_model": format!(
                "Value-based pricing anchored to the economic outcome the customer gets — \
                 not a cost-plus or competitor-matching model. \
                 Start with a flat monthly fee ({market} benchmark for {category}: \
                 $99–$499/month for SMB, $1K–$5K/month for enterprise). \
                 Annual upfront pricing from day one to extend runway and signal commitment from customers."
            ),
        },
        "competitive_landscape_today": format!(
            "The {category} market has shifted materially since {name}'s {shutdown} shutdown. \
             Post-2023 AI tooling has reduced the cost of building in this space by 60–80%, \
             meaning the original {name} vision is likely achievable for a fraction of {funding}. \
             Some competitors that existed when {name} shut down may have weakened or pivoted; \
             new players have likely entered. \
             A full competitive audit in {cur_year} — mapping every current solution against the \
             original problem — is essential before committing to a positioning for the revived product."
        ),
        "risk_register": [
            {
                "risk": format!(
                    "The original failure repeats — spending {funding}-equivalent capital without finding PMF"
                ),
                "mitigation": "Hard cap on spending before PMF: no more than $250K before 10 paying customers. \
                               If you hit that cap, stop and re-evaluate the thesis — don't raise more.",
            },
            {
                "risk": format!(
                    "The market has moved on since {shutdown} and the problem is now solved by an incumbent"
                ),
                "mitigation": "Before building anything, spend 2 weeks mapping every current solution to the problem. \
                               If an incumbent now solves it adequately, the insight is dead — find an adjacent problem.",
            },
            {
                "risk": "Founder credibility gap — the market associates the name with failure",
                "mitigation": format!(
                    "Lead with the lessons, not the brand. A 'Built on the ashes of {name}' narrative is \
                     actually a powerful signal of self-awareness if the pitch acknowledges exactly \
                     what went wrong and why it's fixed now."
                ),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};

    #[test]
    fn strategy_names_the_relaunch_year() {
        let ctx: MockContext =
            MockContext::from_user_message("Startup: Quibi\nActive: 2018 → 2020\n");
        let data: Value = strategy(&ctx);

        let expected: String = format!("Quibi ({})", Utc::now().year());
        assert_eq!(data["revised_name"], expected.as_str());
        assert_eq!(data["gtm_strategy"]["90_day_plan"].as_array().map(Vec::len), Some(6));
        assert_eq!(data["gtm_strategy"]["what_not_to_do"].as_array().map(Vec::len), Some(5));
        assert_eq!(data["risk_register"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn long_descriptions_are_clipped_in_the_core_insight() {
        let long_desc: String = "x".repeat(150);
        let message: String = format!("Startup: Quibi\nWhat it did: {long_desc}\n");
        let data: Value = strategy(&MockContext::from_user_message(&message));

        let insight = data["core_insight"].as_str().unwrap();
        assert!(insight.contains(&"x".repeat(100)));
        assert!(!insight.contains(&"x".repeat(101)));
    }
}
