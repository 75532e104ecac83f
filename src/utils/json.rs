// JSON helpers shared by the response envelope and the agent pipeline.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Spans from the first `{` to the last `}`, across newlines.
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid pattern"));

// Convert any `Serialize` type into a two-space-indented JSON string.
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> Result<String> {
    let json_value: serde_json::Value = serde_json::to_value(value)?;
    let pretty_json: String = serde_json::to_string_pretty(&json_value)?;
    Ok(pretty_json)
}

/// Carves the outermost `{...}` block out of raw model output. Models like to
/// wrap their JSON in prose or code fences; when no object is found the input
/// is returned untouched and the caller's parse decides what happens next.
pub fn extract_json_object(text: &str) -> &str {
    match JSON_OBJECT.find(text) {
        Some(found) => found.as_str(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_from_fenced_reply() {
        let raw = "Here you go:\n```json\n{\"a\": 1}\n```\nanything else?";
        assert_eq!(extract_json_object(raw), "{\"a\": 1}");
    }

    #[test]
    fn spans_first_to_last_brace() {
        let raw = "x {\"a\": {\"b\": 2}} y {\"c\": 3} z";
        assert_eq!(extract_json_object(raw), "{\"a\": {\"b\": 2}} y {\"c\": 3}");
    }

    #[test]
    fn returns_input_when_no_object_present() {
        assert_eq!(extract_json_object("plain text"), "plain text");
    }

    #[test]
    fn indented_json_uses_two_spaces() {
        let value = serde_json::json!({ "outer": { "inner": 1 } });
        let pretty: String = to_two_space_indented_json(&value).unwrap();
        assert!(pretty.contains("\n  \"outer\""));
        assert!(pretty.contains("\n    \"inner\""));
    }
}
