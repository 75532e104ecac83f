// Deterministic offline completions, shaped like the remote model's replies.
//
// Dispatch keys off distinctive phrases in each agent's system prompt. All
// content is derived from the user message, so the generated report always
// reflects the submitted brief rather than canned placeholder data.

mod autopsy;
mod context;
mod copywriter;
mod research;
mod revival;

use chrono::{Datelike, Utc};

use context::MockContext;

pub(crate) fn current_year() -> i32 {
    Utc::now().year()
}

/// Produces a canned completion for the given prompts.
pub fn complete(system: &str, user: &str) -> String {
    let system_lc: String = system.to_lowercase();
    let ctx: MockContext = MockContext::from_user_message(user);

    if system_lc.contains("encyclopaedic")
        || (system_lc.contains("research analyst") && system_lc.contains("dossier"))
    {
        return research::dossier(&ctx).to_string();
    }

    if system_lc.contains("ruthless") || system_lc.contains("post-mortem analyst") {
        return autopsy::report(&ctx).to_string();
    }

    // The copywriter prompt also mentions revival copy, so strategy detection
    // must explicitly exclude it.
    if (system_lc.contains("relaunch specialist") || system_lc.contains("strategist"))
        && !system_lc.contains("copywriter")
    {
        return revival::strategy(&ctx).to_string();
    }

    if system_lc.contains("elite startup copywriter")
        || system_lc.contains("three polished")
        || system_lc.contains("copywriter")
    {
        return copywriter::outputs(&ctx).to_string();
    }

    format!("Analysis complete for {}.", ctx.name)
}
