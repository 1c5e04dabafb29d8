//! Text helpers for displaying stored questions and feedback.

/// Collapse runs of whitespace and cut to at most `max_chars` characters,
/// appending `...` when the text was shortened.
pub fn preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = collapsed.chars().take(keep).collect();
    out.push_str("...");
    out
}
