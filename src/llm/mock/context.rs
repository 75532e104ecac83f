// Scrapes structured fields back out of agent user messages.
//
// Early-stage messages carry the labelled founder-context block; later stages
// carry prior agent output as indented JSON. Both shapes are probed, the
// labelled lines first.

use once_cell::sync::Lazy;
use regex::Regex;

fn pattern(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|err| panic!("invalid pattern {source:?}: {err}"))
}

static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // "Startup: XYZ,\n..."
        pattern(r"(?im)^Startup[:\s]+([A-Za-z0-9][A-Za-z0-9\s\.\-]{1,50}?)[,\s]"),
        // startup_name: "XYZ"
        pattern(r#"(?i)startup_name["\s:]+([A-Za-z0-9][A-Za-z0-9\s\.\-]{1,50}?)""#),
        // "name": "XYZ"
        pattern(r#"(?i)"name"\s*:\s*"([A-Za-z0-9][^"]{1,50}?)""#),
    ]
});

// Placeholder names that must never be mistaken for a real startup.
const NOISE_NAMES: [&str; 5] = ["this startup", "unknown", "n/a", "none", "the startup"];

static ACTIVE_FOUNDED: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)Active:\s*(\d{4})"));
static ACTIVE_SHUTDOWN: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)Active:\s*\d{4}\s*[→\-]+\s*(\d{4})"));
static FUNDING_LINE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)Funding:\s*([^\n]+)"));
// Stops at an em-dash so dossier source titles like "X — CB Insights" stay out.
static INDUSTRY_LINE: Lazy<Regex> = Lazy::new(|| pattern(r#"(?i)Industry:\s*([^—\n"]+)"#));
static MARKET_LINE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)Market:\s*([^\n]+)"));
static DESC_LINE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)What it did:\s*([^\n]+)"));
static OVERVIEW_LINE: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)Founder's description.*?:\s*([^\n]+)"));
static WHY_FAILED_LINE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)Why it failed.*?:\s*([^\n]+)"));

static JSON_FOUNDED: Lazy<Regex> = Lazy::new(|| pattern(r#"(?i)"founded"\s*:\s*"([^"]+)""#));
static JSON_SHUTDOWN: Lazy<Regex> = Lazy::new(|| pattern(r#"(?i)"shutdown"\s*:\s*"([^"]+)""#));
static JSON_FUNDING: Lazy<Regex> = Lazy::new(|| pattern(r#"(?i)"funding"\s*:\s*"([^"]+)""#));
static JSON_CATEGORY: Lazy<Regex> = Lazy::new(|| pattern(r#"(?i)"category"\s*:\s*"([^"]+)""#));
static JSON_MARKET: Lazy<Regex> = Lazy::new(|| pattern(r#"(?i)"market"\s*:\s*"([^"]+)""#));
static JSON_ONE_LINER: Lazy<Regex> = Lazy::new(|| pattern(r#"(?i)"one_liner"\s*:\s*"([^"]+)""#));
static JSON_WHAT_BUILT: Lazy<Regex> =
    Lazy::new(|| pattern(r#"(?i)"what_they_built"\s*:\s*"([^"]{10,200})""#));

static SIGNALS_BLOCK: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)context_signals.*?(\[[^\]]*\])"));
static QUOTED: Lazy<Regex> = Lazy::new(|| pattern(r#""([^"]+)""#));

fn first_capture(re: &Regex, haystack: &str) -> String {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Everything the offline builders know about the startup under analysis,
/// defaulted the same way the live prompts tell the model to assume.
#[derive(Debug)]
pub struct MockContext {
    pub name: String,
    pub founded: String,
    pub shutdown: String,
    pub funding: String,
    pub category: String,
    pub market: String,
    pub desc: String,
    pub overview: String,
    pub why_failed: String,
    pub signals: Vec<String>,
    pub slug: String,
    pub name_enc: String,
    pub active_str: String,
}

impl MockContext {
    pub fn from_user_message(user: &str) -> Self {
        let name: String = extract_name(user);

        let pick = |primary: &Regex, fallback: &Regex| -> String {
            let value: String = first_capture(primary, user);
            if value.is_empty() {
                first_capture(fallback, user)
            } else {
                value
            }
        };

        let founded: String = non_empty(pick(&ACTIVE_FOUNDED, &JSON_FOUNDED), "Unknown");
        let shutdown: String = non_empty(pick(&ACTIVE_SHUTDOWN, &JSON_SHUTDOWN), "Unknown");
        let funding: String = non_empty(pick(&FUNDING_LINE, &JSON_FUNDING), "Undisclosed");
        let category: String = non_empty(pick(&JSON_CATEGORY, &INDUSTRY_LINE), "Technology");
        let market: String = non_empty(pick(&MARKET_LINE, &JSON_MARKET), "Global");

        let mut desc: String = first_capture(&DESC_LINE, user);
        if desc.is_empty() {
            desc = first_capture(&JSON_ONE_LINER, user);
        }
        if desc.is_empty() {
            desc = first_capture(&JSON_WHAT_BUILT, user);
        }
        if desc.is_empty() {
            desc = format!("{name} built a product in the {category} space.");
        }

        let signals: Vec<String> = QUOTED
            .captures_iter(&first_capture(&SIGNALS_BLOCK, user))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect();

        let slug: String = slugify(&name);
        let name_enc: String = name.replace(' ', "+");
        let active_str: String = match (founded.parse::<i64>(), shutdown.parse::<i64>()) {
            (Ok(from), Ok(to)) => {
                let years: i64 = to - from;
                format!("{founded}–{shutdown} ({years} year{})", plural(years))
            }
            _ => format!("{founded}–{shutdown}"),
        };

        Self {
            name,
            founded,
            shutdown,
            funding,
            category,
            market,
            desc,
            overview: first_capture(&OVERVIEW_LINE, user),
            why_failed: first_capture(&WHY_FAILED_LINE, user),
            signals,
            slug,
            name_enc,
            active_str,
        }
    }

    /// "Critical" when any context signal mentions one of the lowercase keys,
    /// otherwise the lens default.
    pub fn signal_rating(&self, keys: &[&str], default: &str) -> String {
        for signal in &self.signals {
            let signal_lc: String = signal.to_lowercase();
            if keys.iter().any(|key| signal_lc.contains(key)) {
                return "Critical".to_string();
            }
        }
        default.to_string()
    }

    pub fn signals_joined_lower(&self) -> String {
        self.signals.join(" ").to_lowercase()
    }

    /// Signals plus the founder's failure line, one lowercase haystack.
    pub fn signal_text(&self) -> String {
        format!("{} {}", self.signals_joined_lower(), self.why_failed.to_lowercase())
    }

    pub fn funding_disclosed(&self) -> bool {
        !matches!(self.funding.as_str(), "Undisclosed" | "Unknown" | "")
    }

    /// "N year(s)" when both years parsed, a neutral phrase otherwise.
    pub fn years_active_text(&self) -> String {
        match (self.founded.parse::<i64>(), self.shutdown.parse::<i64>()) {
            (Ok(from), Ok(to)) => {
                let years: i64 = to - from;
                format!("{years} year{}", plural(years))
            }
            _ => "its operating window".to_string(),
        }
    }
}

fn extract_name(user: &str) -> String {
    for re in NAME_PATTERNS.iter() {
        if let Some(m) = re.captures(user).and_then(|caps| caps.get(1)) {
            let candidate: String = title_case(m.as_str().trim());
            if !NOISE_NAMES.contains(&candidate.to_lowercase().as_str()) {
                return candidate;
            }
        }
    }
    "This Startup".to_string()
}

fn non_empty(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

pub(super) fn plural(count: i64) -> &'static str {
    if count != 1 {
        "s"
    } else {
        ""
    }
}

/// Starts every letter run uppercase and lowers the rest, so shouted or
/// lowercased form input still reads like a product name.
fn title_case(value: &str) -> String {
    let mut out: String = String::with_capacity(value.len());
    let mut prev_letter: bool = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

static SLUG_CLEANUP: Lazy<Regex> = Lazy::new(|| pattern(r"[^a-z0-9]+"));

fn slugify(name: &str) -> String {
    SLUG_CLEANUP
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
