// Small text helpers used by the report builders.

/// Truncates to at most `max` characters, without a marker.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        text.chars().take(max).collect()
    } else {
        text.to_string()
    }
}

/// Truncates to at most `max` characters, appending an ellipsis when cut.
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let truncated: String = text.chars().take(max).collect();
        format!("{truncated}…")
    } else {
        text.to_string()
    }
}
