//! Pre-segmentation cleanup

use super::{is_terminator, is_word_char};

/// Normalize raw text before segmentation
///
/// Drops every character that is not a word character, whitespace or a
/// sentence terminator, then collapses whitespace runs to a single space and
/// trims both ends. Quotes, parentheses and commas disappear; `.`, `!` and `?`
/// survive so sentence boundaries stay detectable.
pub fn normalize(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|&ch| is_word_char(ch) || ch.is_whitespace() || is_terminator(ch))
        .collect();

    let mut normalized = String::with_capacity(kept.len());
    for word in kept.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}
