//! Pure transforms between list-shaped record fields and the flat text
//! the editor exposes. Delimited text is a transient editing
//! representation only; the structured list is always canonical.

/// Comma-separated text to an ordered list: split on ',', trim each
/// segment, drop empties.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_comma_list(items: &[String]) -> String {
    items.join(", ")
}

/// Newline-separated text to an ordered list, same trim/drop rules.
pub fn split_line_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_line_list(items: &[String]) -> String {
    items.join("\n")
}
