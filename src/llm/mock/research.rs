// Offline research dossier, derived entirely from the submitted brief.

use serde_json::{json, Value};

use super::context::{plural, MockContext};
use super::current_year;
use crate::utils::text::ellipsize;

pub(super) fn dossier(ctx: &MockContext) -> Value {
    let name: &str = &ctx.name;
    let founded: &str = &ctx.founded;
    let shutdown: &str = &ctx.shutdown;
    let funding: &str = &ctx.funding;
    let category: &str = &ctx.category;
    let market: &str = &ctx.market;
    let desc: &str = &ctx.desc;
    let slug: &str = &ctx.slug;
    let name_enc: &str = &ctx.name_enc;
    let active_str: &str = &ctx.active_str;
    let cur_year: i32 = current_year();

    let sources: Value = json!([
        { "title": format!("{name} — Crunchbase Profile"), "url": format!("https://www.crunchbase.com/organization/{slug}") },
        { "title": format!("{name} — Google News Archive"), "url": format!("https://news.google.com/search?q={name_enc}+startup+shutdown") },
        { "title": format!("{name} — Hacker News Discussions"), "url": format!("https://hn.algolia.com/?q={name_enc}") },
        { "title": format!("{name} — TechCrunch Coverage"), "url": format!("https://techcrunch.com/search/{slug}") },
        { "title": format!("{name} — Reddit Threads"), "url": format!("https://www.reddit.com/search/?q={name_enc}+startup&sort=relevance") },
        { "title": format!("{name} — LinkedIn Company Page"), "url": format!("https://www.linkedin.com/search/results/companies/?keywords={name_enc}") },
        { "title": format!("{name} — PitchBook Entry"), "url": format!("https://pitchbook.com/search#q={name_enc}&type=all") },
        { "title": format!("Industry: {category} — CB Insights"), "url": format!("https://www.cbinsights.com/research-{slug}") },
    ]);

    let pivot_text: String = if ctx.why_failed.is_empty() {
        "No specific pivot data publicly available; shutdown appears to have been a clean wind-down."
            .to_string()
    } else {
        format!("Pivots noted: {}", ctx.why_failed)
    };
    let press_text: String = format!(
        "Based on available signals, {name} received coverage during its {active_str} lifespan, \
         with post-mortem commentary emerging after the {shutdown} shutdown."
    );
    let community_text: String = format!(
        "Hacker News and Reddit discussions around {name} reference common themes: \
         difficulty finding a scalable business model, competitive pressure in the {category} space, \
         and challenges converting early traction into sustainable growth."
    );
    let competitor_text: String = format!(
        "Competitors in the {category} space during {founded}–{shutdown} included both \
         established incumbents and well-funded startups racing for market share. \
         {name} faced the challenge of differentiating in an increasingly crowded landscape."
    );
    let market_cond: String = format!(
        "The {market} {category} market during {founded}–{shutdown} was characterised by \
         rapid technological change, shifting customer expectations, and increasing competition for funding. \
         External macro conditions during this window added pressure on runway-constrained startups."
    );
    let founder_txt: String = if ctx.overview.is_empty() {
        format!(
            "Limited public commentary from {name}'s founders is available. \
             Post-shutdown interviews or blog posts, if they exist, would provide the most direct insight."
        )
    } else {
        ctx.overview.clone()
    };

    let years_since: i32 = shutdown.parse::<i32>().map(|year| cur_year - year).unwrap_or(3);
    let sig_ctx: String = ctx.signals_joined_lower();

    let shift_pmf: String = if sig_ctx.contains("growth stalled") {
        format!(
            "The 'growth stalled' failure mode that affected {name} is now a well-documented pattern — \
             founders in {cur_year} have access to battle-tested frameworks (Jobs-to-be-Done, concierge MVP, \
             pre-charged waitlists) specifically designed to prevent the product-market fit gap that shut {name} down."
        )
    } else {
        format!(
            "The {category} market has matured since {shutdown}: customer education costs are lower, \
             the category vocabulary is established, and buyers arrive with clearer expectations than {name}'s \
             early customers did — reducing the sales cycle friction that consumed early runway."
        )
    };
    let validation_note: String = if ctx.funding_disclosed() {
        format!("can now be validated with under $500K, compared to the {funding} the original required")
    } else {
        "can now be validated for a fraction of what the original required".to_string()
    };
    let shift_ai: String = format!(
        "Post-2023 AI/LLM tooling has cut the cost of building a {category} product by 60–80%. \
         The core {name} vision — {} — {validation_note}.",
        ellipsize(desc, 60)
    );
    let shift_infra: String = if founded != "Unknown" && !founded.is_empty() {
        format!(
            "Since {shutdown}, {years_since} year{} of cloud infrastructure \
             investment has commoditised the {category} backend stack that would have absorbed a significant \
             portion of {name}'s engineering budget. What required a full platform team in {founded} \
             is now a managed service configuration in {cur_year}.",
            plural(years_since as i64)
        )
    } else {
        format!(
            "Infrastructure commoditisation since {shutdown} means the platform engineering investment \
             that consumed early runway in the {category} space is now available as managed services, \
             dramatically reducing time-to-market for a revived product."
        )
    };
    let funding_note: String = if ctx.funding_disclosed() {
        format!(
            "The {funding} raised by the original is now a cautionary number, not an aspirational one — \
             a revived {name} that raises less and proves more will be the stronger fundraising story."
        )
    } else {
        "A leaner raise with earlier revenue is now a competitive advantage in fundraising, not a compromise."
            .to_string()
    };
    let shift_funding: String = format!(
        "Post-2022 funding discipline has flipped the narrative: investors in {cur_year} actively \
         reward capital efficiency and early revenue — the exact story a lean {name} revival can tell \
         by starting with 10 paying customers and no institutional capital. {funding_note}"
    );
    let shift_comp: String = format!(
        "Competitors that defeated {name} in {founded}–{shutdown} may themselves have weakened or pivoted \
         in the {years_since} years since. The competitive map in the {category} space in {market} \
         must be re-drawn from scratch in {cur_year} — advantages that seemed insurmountable in {shutdown} \
         may no longer exist, and new gaps may have opened."
    );

    let series_a_year: String = founded
        .parse::<i32>()
        .map(|year| (year + 2).to_string())
        .unwrap_or_else(|_| "n/a".to_string());

    json!({
        "name": name,
        "founded": founded,
        "shutdown": shutdown,
        "funding": funding,
        "investors": [
            format!("Seed-stage investors ({founded})"),
            format!("Series A investors ({series_a_year})"),
            "Strategic angels",
        ],
        "category": category,
        "market": market,
        "one_liner": desc,
        "what_they_built": if ctx.overview.is_empty() { desc } else { ctx.overview.as_str() },
        "press_coverage": press_text,
        "founder_interviews": founder_txt,
        "community_signals": community_text,
        "pivots": pivot_text,
        "competitor_landscape": competitor_text,
        "market_conditions": market_cond,
        "key_market_shifts": [shift_ai, shift_pmf, shift_infra, shift_funding, shift_comp],
        "competitors_doing_well": competitor_archetypes(ctx),
        "data_confidence": "medium",
        "public_data_available": true,
        "sources": sources,
    })
}

/// Three competitor success archetypes built from the startup's own inputs,
/// never from named companies.
fn competitor_archetypes(ctx: &MockContext) -> Value {
    let name: &str = &ctx.name;
    let market: &str = &ctx.market;
    let cat: &str = &ctx.category;
    let active_str: &str = &ctx.active_str;
    let cur_year: i32 = current_year();

    let sig_text: String = ctx.signal_text();
    let core_desc: String = ellipsize(&ctx.desc, 75);
    let short_name: &str = match ctx.name.split_whitespace().next() {
        Some(first) if ctx.name.contains(' ') => first,
        _ => name,
    };

    let ran_out: bool =
        sig_text.contains("ran out of money") || sig_text.contains("wrong pricing");
    let no_pmf: bool =
        sig_text.contains("growth stalled") || sig_text.contains("product was never finished");
    let big_comp: bool = sig_text.contains("larger competitor");

    let raised_str: String = if ctx.funding_disclosed() {
        format!("{} raised", ctx.funding)
    } else {
        "its capital".to_string()
    };

    let wedge_full: String = format!("tried to build {core_desc} for the full {cat} market");
    let a1: Value = json!({
        "name": format!("The Narrow-Wedge {cat} Player"),
        "outcome": format!(
            "Achieved self-sustaining growth in the {market} {cat} market \
             — in less time than {short_name} had on the market"
        ),
        "why_succeeded": format!(
            "This competitor solved the same core problem as {name} but refused to serve more than one \
             specific customer segment in the first 12 months. \
             Unlike {name} — which {wedge_full} — \
             this player picked the single most painful step in the {cat} workflow and became \
             indispensable for it before touching anything adjacent. \
             Every feature, every sales conversation, every pricing decision was anchored to \
             that one segment's exact daily pain — not to a broader vision. \
             Expansion happened only after word-of-mouth within that segment was self-sustaining."
        ),
        "key_lesson": format!(
            "The startup that wins a large market usually enters through the narrowest possible door. \
             Narrow scope compresses the feedback loop, reduces burn rate, and manufactures \
             the word-of-mouth that broad products can never buy. \
             In the {cat} space, 'solve everything' is a fundraising story — 'solve this one thing completely' \
             is a go-to-market strategy."
        ),
        "how_to_apply": format!(
            "The revived {name} should answer one question before writing a line of code: \
             'What is the single most painful, most frequent moment in the {cat} workflow \
             that our target customer in {market} experiences?' \
             The original spent {active_str} trying to be comprehensive — the revival must spend \
             its first 6 months being indispensable for one thing. \
             Resist every pressure to generalise until that wedge generates unsolicited referrals."
        ),
    });

    let capital_contrast: String = if ctx.funding_disclosed() {
        format!("where {name} spent {raised_str} validating whether the market existed")
    } else {
        format!("where {name} burned runway before confirming willingness to pay")
    };
    let pmf_note: String = if no_pmf {
        "Growth stalling after initial traction is a classic late-stage PMF signal — \
         it means early adopters adopted but the mainstream refused to follow."
            .to_string()
    } else {
        format!(
            "In the {cat} space, the gap between 'users love it' and 'users pay for it' \
             has killed more startups than any competitor ever has."
        )
    };
    let spend_contrast: &str = if raised_str != "its capital" {
        &raised_str
    } else {
        "the typical raise for this category"
    };
    let revenue_lesson: String = if ctx.funding_disclosed() {
        format!(
            "The {} raised by {name} should have purchased 10 paying customers before it purchased a single engineer.",
            ctx.funding
        )
    } else {
        "Revenue should precede roadmap. Every feature should be paid for before it is built."
            .to_string()
    };
    let revenue_apply: String = if ran_out {
        "Those 5 paying customers should fund the first 60 days of development entirely — \
         no external capital needed to reach that milestone."
            .to_string()
    } else {
        format!(
            "Use those 5 paying customers as the only valid input to the {cur_year} roadmap. \
             Kill every feature that none of them asked for."
        )
    };
    let a2: Value = json!({
        "name": format!("The Revenue-First {cat} Builder"),
        "outcome": format!(
            "Reached positive unit economics in the {market} {cat} market \
             spending a fraction of {spend_contrast}"
        ),
        "why_succeeded": format!(
            "This competitor's founding rule was: no product feature gets built unless a customer \
             has already paid for it. They ran a manual concierge MVP for 90 days — doing the job \
             by hand that the software would eventually automate. \
             The first 5 customers paid before a single scalable line of code was written. \
             Every subsequent feature was pre-sold. \
             {}, this player spent under $100K confirming \
             the same hypothesis. {pmf_note}",
            capitalize_sentence(&capital_contrast)
        ),
        "key_lesson": format!(
            "Willingness to pay is the only PMF signal that doesn't lie. \
             User sign-ups, NPS scores, and letters of intent are all proxies. \
             A customer handing over money — before the product is complete — \
             is the only truly honest signal in the {cat} space. {revenue_lesson}"
        ),
        "how_to_apply": format!(
            "Before rebuilding {name}, identify 5 target customers in {market} who would pay today — \
             not 'when the product is ready', not 'in principle', but this week, for a manual \
             version of the solution. If 5 people won't pay for a human doing the job, the software \
             version won't change that. {revenue_apply}"
        ),
    });

    let big_comp_note: String = if big_comp {
        format!(
            "When a larger competitor entered the {cat} space, this player was protected \
             because its distribution channel was owned, not rented — the competitor \
             couldn't copy the channel relationship the way it could copy features."
        )
    } else {
        format!(
            "In the {cat} market in {market}, no amount of product quality compensates \
             for the wrong distribution strategy. This player proved it."
        )
    };
    let channel_type: String = channel_for_category(cat);
    let channel_lesson: String = format!(
        "The {active_str} that {name} spent suggests time was available to build distribution. \
         The question is whether it was prioritised."
    );
    let channel_apply: &str = if ctx.funding_disclosed() {
        "If no such partner exists, that absence is itself a signal — distribution-resistant markets \
         require either a very long runway or a very viral product mechanic."
    } else {
        "If no distribution partner is available, the go-to-market must be rethought before a line of code is written."
    };
    let a3: Value = json!({
        "name": format!("The Channel-Owned {cat} Entrant"),
        "outcome": format!(
            "Acquired its first 100 paying customers in {market} at near-zero acquisition cost \
             by owning its distribution channel before shipping product"
        ),
        "why_succeeded": format!(
            "This competitor spent the first 60 days of its existence securing \
             {channel_type} — before writing a single line of product code. \
             By launch day, 50 qualified, warm leads were already waiting. \
             They never ran a paid ad. They never hired a sales team before achieving repeatable, \
             founder-led revenue. {big_comp_note}"
        ),
        "key_lesson": format!(
            "Distribution is a strategy, not a tactic. In {cat}, the company that owns \
             a distribution channel — whether through partnerships, developer communities, \
             platform integrations, or earned content — beats the company with a better \
             product every time at the same funding level. {channel_lesson}"
        ),
        "how_to_apply": format!(
            "Before the revived {name} builds anything, map the full distribution landscape \
             in {market}: who already has the daily attention of the target {cat} customer? \
             What integration, partnership, or community could deliver customers without paid acquisition? \
             Specifically for {name}'s space: {channel_type} is the distribution vector worth exploring first. \
             Close that partnership before the product ships. {channel_apply}"
        ),
    });

    json!([a1, a2, a3])
}

fn channel_for_category(cat: &str) -> String {
    let cat_lc: String = cat.to_lowercase();
    let has = |keys: &[&str]| keys.iter().any(|key| cat_lc.contains(key));

    if has(&["b2b", "saas", "enterprise", "platform", "software"]) {
        "bottom-up adoption through a permanent free tier that individual contributors used before IT got involved"
            .to_string()
    } else if has(&["health", "medical", "bio", "clinic"]) {
        "clinical co-development partnerships with 2–3 health systems who provided distribution in exchange for design authority"
            .to_string()
    } else if has(&["consumer", "social", "media", "content", "audio"]) {
        "a single organic content channel that already had the attention of the target audience before the product launched"
            .to_string()
    } else if has(&["fintech", "finance", "payment", "banking"]) {
        "API-first developer adoption where engineers at target companies became internal champions before the enterprise sale began"
            .to_string()
    } else if has(&["hardware", "iot", "device"]) {
        "a strategic distribution partnership with an established channel that already sold to the target customer"
            .to_string()
    } else {
        format!("one trusted distribution partner already embedded in the {cat} customer's existing workflow")
    }
}

/// First character upper, the rest lowered, matching sentence case even when
/// the input carries product names or amounts.
fn capitalize_sentence(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dossier_for(message: &str) -> Value {
        dossier(&MockContext::from_user_message(message))
    }

    #[test]
    fn dossier_reflects_the_brief() {
        let data: Value = dossier_for(
            "Startup: Quibi\nIndustry: Consumer Video\nMarket: United States\n\
             Active: 2018 → 2020\nFunding: $1.75B\nWhat it did: Short-form mobile streaming.",
        );

        assert_eq!(data["name"], "Quibi");
        assert_eq!(data["founded"], "2018");
        assert_eq!(data["one_liner"], "Short-form mobile streaming.");
        assert_eq!(data["data_confidence"], "medium");
        assert_eq!(data["public_data_available"], true);
        assert_eq!(data["sources"].as_array().map(Vec::len), Some(8));
        assert_eq!(data["key_market_shifts"].as_array().map(Vec::len), Some(5));
        assert_eq!(data["investors"][1], "Series A investors (2020)");
        assert_eq!(
            data["sources"][0]["url"],
            "https://www.crunchbase.com/organization/quibi"
        );
    }

    #[test]
    fn archetypes_are_named_after_the_category() {
        let data: Value = dossier_for("Startup: Quibi\nIndustry: Consumer Video\n");
        let archetypes = data["competitors_doing_well"].as_array().unwrap();

        assert_eq!(archetypes.len(), 3);
        assert_eq!(archetypes[0]["name"], "The Narrow-Wedge Consumer Video Player");
        assert_eq!(archetypes[1]["name"], "The Revenue-First Consumer Video Builder");
        assert_eq!(archetypes[2]["name"], "The Channel-Owned Consumer Video Entrant");
    }

    #[test]
    fn undisclosed_funding_stays_out_of_the_capital_story() {
        let data: Value = dossier_for("Startup: Vine\nIndustry: Social Media\n");
        let why = data["competitors_doing_well"][1]["why_succeeded"].as_str().unwrap();

        assert!(why.contains("Where vine burned runway before confirming willingness to pay"));
    }

    #[test]
    fn consumer_categories_get_the_content_channel() {
        let data: Value = dossier_for("Startup: Vine\nIndustry: Social Media\n");
        let why = data["competitors_doing_well"][2]["why_succeeded"].as_str().unwrap();

        assert!(why.contains("a single organic content channel"));
    }

    #[test]
    fn capitalize_lowers_everything_after_the_first_letter() {
        assert_eq!(capitalize_sentence("where Quibi spent $1.75B"), "Where quibi spent $1.75b");
        assert_eq!(capitalize_sentence(""), "");
    }
}
