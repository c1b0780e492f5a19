//! Text normalization shared by the scorer and the keyword finder.

/// Lowercases `text`, drops every char that is not `a-z`, `0-9`, or whitespace,
/// and collapses whitespace runs into single spaces with no leading/trailing space.
///
/// Dropped chars are deleted, not replaced, so "well-known" becomes "wellknown".
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_separator(c))
        .collect();

    kept.split(is_separator)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
/// (U+001C..=U+001F), which also split words.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whitespace tokens of an already-normalized string.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|t| !t.is_empty())
}
