//! String helpers for log previews.

/// Shorten `s` to at most `max_chars` characters for log output.
///
/// Counts characters, not bytes, so accented clues never get cut inside a
/// code point. Newlines are flattened so a preview stays on one log line.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_chars {
        return flat;
    }

    let keep = max_chars.saturating_sub(3);
    let mut out: String = flat.chars().take(keep).collect();
    out.push_str("...");
    out
}
