//! String utilities for the domain layer.

/// Shorten a label to at most `max_chars` characters, ending with `…` when cut.
///
/// Counts characters rather than bytes so accented dish names line up in
/// fixed-width tables.
pub fn truncate_label(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Empty labels are shown as a dash in listings.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
