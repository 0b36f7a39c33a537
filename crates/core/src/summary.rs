//! Short-description summarizer.
//!
//! Lengths and cut points are counted in `char`s so a cut never lands inside
//! a multi-byte code point.

/// Maximum length of a short description.
pub const SHORT_DESCRIPTION_MAX: usize = 160;

const ELLIPSIS: &str = "...";

/// A sentence end must sit past this index to be used as the cut point.
const MIN_SENTENCE_END: usize = SHORT_DESCRIPTION_MAX * 7 / 10;

/// Shorten `description` to at most [`SHORT_DESCRIPTION_MAX`] chars.
///
/// Cuts at the last `.`, `!` or `?` inside the first `MAX - 3` chars when it
/// sits past 70% of the limit, otherwise hard-truncates and appends `...`.
pub fn summarize(description: &str) -> String {
    if description.chars().count() <= SHORT_DESCRIPTION_MAX {
        return description.to_string();
    }

    let truncated: Vec<char> = description
        .chars()
        .take(SHORT_DESCRIPTION_MAX - ELLIPSIS.len())
        .collect();

    let last_sentence_end = truncated
        .iter()
        .rposition(|c| matches!(c, '.' | '!' | '?'));

    match last_sentence_end {
        Some(end) if end > MIN_SENTENCE_END => truncated[..=end].iter().collect(),
        _ => {
            let head: String = truncated.into_iter().collect();
            format!("{}{ELLIPSIS}", head.trim())
        }
    }
}

/// First [`SHORT_DESCRIPTION_MAX`] chars of a title, without sentence logic.
pub fn truncate_title(title: &str) -> String {
    title.chars().take(SHORT_DESCRIPTION_MAX).collect()
}
