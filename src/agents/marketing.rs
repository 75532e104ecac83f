// Agent 5: renders the standalone marketing landing page. Pure templating,
// no model call.

use serde_json::Value;
use tracing::info;

use super::state::AnalysisState;

const LENS_LABELS: [(&str, &str); 6] = [
    ("timing", "⏱ Timing"),
    ("market_size_monetization", "💰 Market & Monetization"),
    ("pmf", "🎯 Product-Market Fit"),
    ("team_execution", "👥 Team & Execution"),
    ("competition_defensibility", "⚔️ Competition"),
    ("external_factors", "🌍 External Factors"),
];

const RATING_COLORS: [(&str, &str); 4] = [
    ("Critical", "#ff4444"),
    ("Significant", "#ff8c00"),
    ("Minor", "#f0b429"),
    ("Not a factor", "#34d399"),
];

fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value.get(key).and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

pub fn run(state: &mut AnalysisState) {
    info!(agent = "marketing", startup = %state.brief.startup_name, "rendering landing page");

    state.marketing_html = render(state);
    state.progress.push("✅ Marketing landing page generated".to_string());
}

fn render(state: &AnalysisState) -> String {
    let null: Value = Value::Null;
    let research: &Value = &state.research;
    let autopsy: &Value = &state.autopsy;
    let revival: &Value = &state.revival;
    let copy_out: &Value = &state.copywriter_outputs;
    let pitch: &Value = copy_out.get("revival_pitch").unwrap_or(&null);
    let card: &Value = copy_out.get("autopsy_summary_card").unwrap_or(&null);
    let gtm: &Value = revival.get("gtm_strategy").unwrap_or(&null);

    let orig_name: &str = research
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(&state.brief.startup_name);
    let relaunch_name: String = format!("{orig_name} (Relaunch)");
    let revised_name: &str = revival
        .get("revised_name")
        .and_then(Value::as_str)
        .unwrap_or(&relaunch_name);
    let orig_funding: &str = text(research, "funding");
    let score: i64 = autopsy
        .get("overall_score")
        .or_else(|| autopsy.get("score"))
        .and_then(Value::as_i64)
        .unwrap_or(20);
    let hypothesis: &str = text(autopsy, "primary_failure_hypothesis");
    let insight: &str = text(revival, "core_insight");
    let icp: &str = text(revival, "revised_icp");
    let reposition: &str = text(revival, "repositioning_statement");
    let channels_txt: &str = text(gtm, "primary_channel");
    let pricing: &str = text(gtm, "pricing_model");
    let comp_today: &str = text(revival, "competitive_landscape_today");
    let elevator: &str = text(copy_out, "elevator_pitch");
    let killer_quote: &str = text(card, "killer_quote");

    let mut lens_cards: String = String::new();
    for (key, label) in LENS_LABELS {
        let lens: &Value = match autopsy.get(key) {
            Some(value) if value.as_object().is_some_and(|object| !object.is_empty()) => value,
            _ => continue,
        };
        let rating: &str = lens.get("rating").and_then(Value::as_str).unwrap_or("—");
        let color: &str = RATING_COLORS
            .iter()
            .find(|(name, _)| *name == rating)
            .map(|(_, hex)| *hex)
            .unwrap_or("#888");
        lens_cards.push_str(&format!(
            r#"
        <div class="lc">
          <div class="lc-top"><span class="lc-name">{label}</span>
            <span class="lc-badge" style="background:{color}">{rating}</span></div>
          <p class="lc-find">{finding}</p>
          <p class="lc-ev">📍 {evidence}</p>
        </div>"#,
            finding = text(lens, "finding"),
            evidence = text(lens, "evidence"),
        ));
    }

    let plan_rows: String = items(gtm, "90_day_plan")
        .iter()
        .map(|step| {
            format!(
                r#"
      <div class="pr"><div class="pw">Week {week}</div>
      <div class="pa">{action}</div></div>"#,
                week = text(step, "week"),
                action = text(step, "action"),
            )
        })
        .collect();

    let dont_rows: String = items(gtm, "what_not_to_do")
        .iter()
        .map(|entry| format!("<li>{}</li>", entry.as_str().unwrap_or("")))
        .collect();

    let risk_rows: String = items(revival, "risk_register")
        .iter()
        .map(|entry| {
            format!(
                r#"
      <div class="risk-row"><div class="risk-label">⚠ {risk}</div>
      <div class="risk-mit">→ {mitigation}</div></div>"#,
                risk = text(entry, "risk"),
                mitigation = text(entry, "mitigation"),
            )
        })
        .collect();

    let top3_rows: String = items(card, "top_3_factors")
        .iter()
        .map(|entry| format!("<li>{}</li>", entry.as_str().unwrap_or("")))
        .collect();

    let pitch_sections: String = [
        ("Problem", "problem"),
        ("Solution", "solution"),
        ("Market", "market"),
        ("Why Now", "why_now"),
        ("Ask", "ask"),
    ]
    .iter()
    .filter_map(|(label, key)| {
        let value: &str = text(pitch, key);
        if value.is_empty() {
            None
        } else {
            Some(format!(
                "<div class='pitch-section'><div class='pl'>{label}</div><div class='pv'>{value}</div></div>"
            ))
        }
    })
    .collect();

    let funding_tag: String = if orig_funding.is_empty() {
        String::new()
    } else {
        format!(" ({orig_funding} raised)")
    };
    let hero_sub: &str = if reposition.is_empty() { icp } else { reposition };
    let lens_block: String = if lens_cards.is_empty() {
        String::new()
    } else {
        format!("<div class='lg'>{lens_cards}</div>")
    };
    let quote_block: String = if killer_quote.is_empty() {
        String::new()
    } else {
        format!("<blockquote>{killer_quote}</blockquote>")
    };
    let comp_block: String = if comp_today.is_empty() {
        String::new()
    } else {
        format!(
            "<div class='rc' style='grid-column:span 2'><div class='rl'>Competitive Landscape Today</div><div class='rv'>{comp_today}</div></div>"
        )
    };
    let dont_block: String = if dont_rows.is_empty() {
        String::new()
    } else {
        format!(
            "<div style='margin-top:28px'><div class='sec-label' style='margin-bottom:10px'>What Not To Do</div><ul class='dont-list'>{dont_rows}</ul></div>"
        )
    };
    let top3_block: String = if top3_rows.is_empty() {
        String::new()
    } else {
        format!(
            "<div style='margin-bottom:16px'><div class='sec-label' style='margin-bottom:6px'>Top 3 Failure Factors</div><ul class='top3-list'>{top3_rows}</ul></div>"
        )
    };

    format!(
        r##"<!DOCTYPE html><html lang="en">
<head><meta charset="UTF-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>{revised_name} — relaunch.ai</title>
<style>
:root{{--a:#6c63ff;--a2:#a78bfa;--dk:#0d0d14;--s:#13131d;--c:#1a1a27;--c2:#1e1e2e;--t:#e2e8f0;--m:#94a3b8;--r:12px}}
*{{box-sizing:border-box;margin:0;padding:0}}body{{font-family:'Segoe UI',system-ui,sans-serif;background:var(--dk);color:var(--t);line-height:1.6}}
.container{{max-width:860px;margin:0 auto;padding:0 24px}}
nav{{background:rgba(13,13,20,.95);backdrop-filter:blur(12px);padding:14px 24px;display:flex;align-items:center;justify-content:space-between;border-bottom:1px solid #ffffff0d;position:sticky;top:0;z-index:99}}
.nlogo{{font-size:1rem;font-weight:800;background:linear-gradient(135deg,var(--a),var(--a2));-webkit-background-clip:text;-webkit-text-fill-color:transparent}}
.nbadge{{background:#6c63ff22;border:1px solid #6c63ff44;color:var(--a2);font-size:.7rem;padding:4px 12px;border-radius:20px;font-weight:600}}
.hero{{padding:80px 0 60px;text-align:center;background:radial-gradient(ellipse 80% 50% at 50% 0%,#6c63ff18,transparent 70%)}}
.orig-tag{{display:inline-block;background:#ff444418;color:#ff8888;border:1px solid #ff444433;border-radius:20px;padding:4px 14px;font-size:.78rem;margin-bottom:20px}}
.hero h1{{font-size:clamp(2.2rem,6vw,3.8rem);font-weight:900;line-height:1.1;margin-bottom:16px;letter-spacing:-.03em}}
.grad{{background:linear-gradient(135deg,var(--a),var(--a2));-webkit-background-clip:text;-webkit-text-fill-color:transparent}}
.hero-sub{{color:var(--m);font-size:1.05rem;max-width:560px;margin:0 auto 32px;line-height:1.65}}
.elevator{{background:var(--c);border:1px solid #6c63ff33;border-radius:var(--r);padding:20px 28px;max-width:660px;margin:0 auto;font-style:italic;color:var(--t);font-size:.95rem;line-height:1.65}}
section{{padding:56px 0}}
.sec-label{{color:var(--a);font-size:.72rem;font-weight:700;text-transform:uppercase;letter-spacing:.12em;margin-bottom:8px}}
h2{{font-size:1.65rem;font-weight:800;margin-bottom:6px}}
.sec-sub{{color:var(--m);margin-bottom:28px;font-size:.92rem}}
.hypo-box{{background:linear-gradient(135deg,var(--c2),var(--c));border:1px solid #ff444433;border-radius:var(--r);padding:24px 28px;position:relative;overflow:hidden;margin-bottom:24px}}
.hypo-box::after{{content:'☠';position:absolute;right:20px;top:8px;font-size:4rem;opacity:.08}}
.hypo-label{{color:#ff8888;font-size:.7rem;font-weight:700;text-transform:uppercase;letter-spacing:.1em;margin-bottom:10px}}
.hypo-text{{color:#fff;font-size:1rem;line-height:1.6}}
.score-row{{display:flex;align-items:center;gap:12px;margin-top:16px}}
.score-bar-wrap{{flex:1;height:5px;background:#ffffff10;border-radius:3px;overflow:hidden}}
.score-bar{{height:100%;background:linear-gradient(90deg,#ff4444,#ff7700);border-radius:3px}}
.score-num{{color:#ff8888;font-weight:800;font-size:.95rem;white-space:nowrap}}
.lg{{display:grid;grid-template-columns:1fr 1fr;gap:14px}}@media(max-width:600px){{.lg{{grid-template-columns:1fr}}}}
.lc{{background:var(--c);border:1px solid #ffffff08;border-radius:var(--r);padding:18px}}
.lc-top{{display:flex;justify-content:space-between;align-items:center;margin-bottom:10px}}
.lc-name{{font-weight:700;font-size:.88rem}}
.lc-badge{{font-size:.66rem;font-weight:700;padding:3px 9px;border-radius:20px;color:#000}}
.lc-find{{color:var(--t);font-size:.85rem;line-height:1.5;margin-bottom:6px}}
.lc-ev{{color:var(--m);font-size:.78rem;font-style:italic}}
.insight{{background:#6c63ff12;border-left:4px solid var(--a);border-radius:0 10px 10px 0;padding:16px 20px;margin:20px 0;font-style:italic;font-size:.95rem}}
.rg{{display:grid;grid-template-columns:1fr 1fr;gap:14px;margin-top:20px}}@media(max-width:600px){{.rg{{grid-template-columns:1fr}}}}
.rc{{background:var(--c);border:1px solid #6c63ff22;border-radius:var(--r);padding:18px}}
.rc .rl{{color:var(--a);font-size:.68rem;font-weight:700;text-transform:uppercase;letter-spacing:.1em;margin-bottom:7px}}
.rc .rv{{color:var(--t);font-size:.88rem;line-height:1.5}}
.dont-list,.risk-rows{{margin-top:14px}}
.dont-list li{{padding:8px 0 8px 18px;border-bottom:1px solid #ffffff07;color:#ff8888;font-size:.86rem;position:relative}}
.dont-list li::before{{content:'✗';position:absolute;left:0;color:#ff4444;font-weight:700}}
.pr{{display:flex;gap:14px;padding:12px 0;border-bottom:1px solid #ffffff07;align-items:flex-start}}
.pw{{min-width:76px;background:var(--a);color:#fff;border-radius:6px;padding:3px 8px;font-size:.72rem;font-weight:700;text-align:center;flex-shrink:0;margin-top:3px}}
.pa{{color:var(--t);font-size:.87rem;line-height:1.5}}
.risk-row{{background:var(--c);border-radius:8px;padding:14px 16px;margin-bottom:10px;border-left:3px solid #ff8c00}}
.risk-label{{color:#ffaa44;font-size:.87rem;font-weight:600;margin-bottom:4px}}
.risk-mit{{color:var(--m);font-size:.83rem}}
.pitch-card{{background:linear-gradient(135deg,var(--c2),var(--c));border:1px solid #6c63ff33;border-radius:var(--r);padding:28px}}
.pitch-section{{margin-top:16px}}
.pitch-section .pl{{color:var(--a);font-size:.68rem;font-weight:700;text-transform:uppercase;letter-spacing:.1em;margin-bottom:5px}}
.pitch-section .pv{{color:var(--t);font-size:.9rem;line-height:1.55}}
.top3-list li{{padding:7px 0 7px 18px;border-bottom:1px solid #ffffff07;font-size:.87rem;position:relative}}
.top3-list li::before{{content:'•';position:absolute;left:0;color:var(--a);font-weight:700}}
blockquote{{background:var(--c2);border-left:3px solid var(--a2);border-radius:0 8px 8px 0;padding:14px 18px;font-style:italic;color:var(--t);font-size:.9rem;margin-top:16px}}
footer{{border-top:1px solid #ffffff0d;padding:28px 0;text-align:center;color:var(--m);font-size:.82rem}}
footer strong{{color:var(--a)}}
::-webkit-scrollbar{{width:5px}}::-webkit-scrollbar-thumb{{background:#333;border-radius:3px}}
</style></head><body>
<nav><div class="nlogo">🔬 relaunch.ai</div><span class="nbadge">AI-Generated Relaunch Plan</span></nav>

<section class="hero"><div class="container">
  <div class="orig-tag">☠ Originally failed as: {orig_name}{funding_tag}</div>
  <h1>Introducing<br/><span class="grad">{revised_name}</span></h1>
  <p class="hero-sub">{hero_sub}</p>
  <div class="elevator">"{elevator}"</div>
</div></section>

<section style="background:var(--s)"><div class="container">
  <div class="sec-label">Post-Mortem</div><h2>Why {orig_name} Really Failed</h2>
  <p class="sec-sub">Six-lens forensic analysis. No excuses.</p>
  <div class="hypo-box">
    <div class="hypo-label">Primary Failure Hypothesis</div>
    <div class="hypo-text">"{hypothesis}"</div>
    <div class="score-row">
      <span class="score-num">Survival Score: {score}/100</span>
      <div class="score-bar-wrap"><div class="score-bar" style="width:{score}%"></div></div>
    </div>
  </div>
  {lens_block}
  {quote_block}
</div></section>

<section><div class="container">
  <div class="sec-label">The Revival</div><h2>What {revised_name} Looks Like in 2025</h2>
  <p class="sec-sub">Same core insight. Completely different execution.</p>
  <div class="insight">💡 {insight}</div>
  <div class="rg">
    <div class="rc"><div class="rl">Revised ICP</div><div class="rv">{icp}</div></div>
    <div class="rc"><div class="rl">Repositioning</div><div class="rv">{reposition}</div></div>
    <div class="rc"><div class="rl">Primary GTM Channel</div><div class="rv">{channels_txt}</div></div>
    <div class="rc"><div class="rl">Pricing Model</div><div class="rv">{pricing}</div></div>
    {comp_block}
  </div>
  {dont_block}
</div></section>

<section style="background:var(--s)"><div class="container">
  <div class="sec-label">Execution Plan</div><h2>90-Day Launch Roadmap</h2>
  <p class="sec-sub">Week by week. No fluff.</p>
  <div>{plan_rows}</div>
</div></section>

<section><div class="container">
  <div class="sec-label">Risk Register</div><h2>What Could Kill the Revival</h2>
  <p class="sec-sub">Top 3 risks — and how to mitigate them early.</p>
  <div class="risk-rows">{risk_rows}</div>
</div></section>

<section style="background:var(--s)"><div class="container">
  <div class="sec-label">Investor Pitch</div><h2>One-Page Summary</h2>
  <div class="pitch-card">
    {top3_block}
    {pitch_sections}
  </div>
</div></section>

<footer><div class="container">
  <p>This relaunch plan was generated by <strong>relaunch.ai</strong> — a five-agent analysis pipeline.</p>
  <p style="margin-top:6px;font-size:.74rem;opacity:.5">Agent-generated content for demo purposes.</p>
</div></footer>
</body></html>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::state::FounderBrief;
    use serde_json::json;

    fn state_with_outputs() -> AnalysisState {
        let brief: FounderBrief = FounderBrief {
            startup_name: "Quibi".to_string(),
            ..Default::default()
        };
        let mut state: AnalysisState = AnalysisState::new(brief);
        state.research = json!({ "name": "Quibi", "funding": "$1.75B" });
        state.autopsy = json!({
            "overall_score": 22,
            "primary_failure_hypothesis": "Spent big before validating demand.",
            "timing": { "rating": "Critical", "finding": "Launched into lockdown.", "evidence": "March 2020." },
            "pmf": {},
        });
        state.revival = json!({
            "revised_name": "Quibi (2026)",
            "core_insight": "Short video still matters.",
            "revised_icp": "Commuters.",
            "repositioning_statement": "Mobile-first stories, creator-owned.",
            "gtm_strategy": {
                "primary_channel": "Creators",
                "pricing_model": "$5/month",
                "90_day_plan": [ { "week": "1–2", "action": "Interview creators." } ],
                "what_not_to_do": [ "Do NOT buy ads." ],
            },
            "risk_register": [ { "risk": "Incumbents", "mitigation": "Niche first." } ],
            "competitive_landscape_today": "Crowded but fragmented.",
        });
        state.copywriter_outputs = json!({
            "elevator_pitch": "Quibi, but lean.",
            "autopsy_summary_card": {
                "killer_quote": "\"Wrong time.\" — Quibi founder perspective",
                "top_3_factors": [ "Timing", "Pricing", "Competition" ],
            },
            "revival_pitch": { "problem": "Attention is mobile.", "ask": "Raising $1.5M." },
        });
        state
    }

    #[test]
    fn page_renders_every_populated_section() {
        let mut state: AnalysisState = state_with_outputs();
        run(&mut state);

        let html: &str = &state.marketing_html;
        assert!(html.contains("<title>Quibi (2026) — relaunch.ai</title>"));
        assert!(html.contains("☠ Originally failed as: Quibi ($1.75B raised)"));
        assert!(html.contains("Survival Score: 22/100"));
        assert!(html.contains("width:22%"));
        assert!(html.contains("⏱ Timing"));
        assert!(html.contains("background:#ff4444"));
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("Week 1–2"));
        assert!(html.contains("<li>Do NOT buy ads.</li>"));
        assert!(html.contains("Competitive Landscape Today"));
        assert!(html.contains("<div class='pl'>Problem</div>"));
        assert!(html.contains("<div class='pl'>Ask</div>"));
        assert_eq!(state.progress, vec!["✅ Marketing landing page generated".to_string()]);
    }

    #[test]
    fn empty_lenses_and_sections_are_skipped() {
        let mut state: AnalysisState = state_with_outputs();
        state.autopsy["pmf"] = json!({});
        state.copywriter_outputs["revival_pitch"] = json!({ "problem": "Attention is mobile." });
        run(&mut state);

        let html: &str = &state.marketing_html;
        assert!(!html.contains("🎯 Product-Market Fit"));
        assert!(!html.contains("<div class='pl'>Solution</div>"));
        assert!(html.contains("<div class='pl'>Problem</div>"));
    }

    #[test]
    fn missing_revival_falls_back_to_the_relaunch_tag() {
        let brief: FounderBrief = FounderBrief {
            startup_name: "Vine".to_string(),
            ..Default::default()
        };
        let mut state: AnalysisState = AnalysisState::new(brief);
        run(&mut state);

        assert!(state.marketing_html.contains("Vine (Relaunch)"));
        assert!(state.marketing_html.contains("Survival Score: 20/100"));
    }
}
