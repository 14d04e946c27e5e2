//! Sentence and word segmentation

use super::{is_terminator, is_word_char};
use crate::language::LanguageResources;
use std::collections::HashSet;

/// Splits text into sentences and word tokens
///
/// Implementations must be deterministic and must never reorder content.
/// Returned slices borrow from the input.
pub trait Segmenter: Send + Sync {
    /// Split `text` into sentences, in document order, trimmed
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Split `text` into word tokens, with punctuation as separate tokens
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Rule-based segmenter for English-like text
///
/// A sentence ends at a run of terminators followed by whitespace or the end
/// of the text. A lone `.` after a known abbreviation or a single capital
/// initial does not end a sentence, unless the next word is a sentence
/// starter. `I` counts as an initial only when another initial follows.
#[derive(Debug, Clone, Default)]
pub struct RuleSegmenter {
    /// Lowercase abbreviations without their trailing period
    abbreviations: HashSet<String>,
    /// Case-sensitive words that reopen a boundary after an abbreviation
    sentence_starters: HashSet<String>,
}

impl RuleSegmenter {
    /// Create a segmenter with no abbreviation table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter using the abbreviations and sentence starters of
    /// `resources`
    pub fn from_resources(resources: &LanguageResources) -> Self {
        Self::with_abbreviations(resources.abbreviations())
            .with_sentence_starters(resources.sentence_starters())
    }

    /// Create a segmenter from an abbreviation list
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
            sentence_starters: HashSet::new(),
        }
    }

    /// Replace the sentence starter table
    pub fn with_sentence_starters<I, S>(mut self, starters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sentence_starters = starters
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    /// Whether the period between `before` and `after` closes an
    /// abbreviation instead of a sentence
    fn closes_abbreviation(&self, before: &str, after: &str) -> bool {
        let word = before.rsplit(char::is_whitespace).next().unwrap_or_default();
        let next = next_word(after);

        if next.is_some_and(|w| self.sentence_starters.contains(w)) {
            return false;
        }

        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            // "I. M. Pei", but not "Nobody came but I."
            (Some('I'), None) => starts_with_initial(after),
            // Initials such as "J. R. R. Tolkien"
            (Some(first), None) if first.is_uppercase() => true,
            _ => self.abbreviations.contains(&word.to_lowercase()),
        }
    }
}

/// The alphabetic run opening `after`, past leading whitespace
fn next_word(after: &str) -> Option<&str> {
    let trimmed = after.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(_, ch)| !ch.is_alphabetic())
        .map_or(trimmed.len(), |(i, _)| i);
    (end > 0).then(|| &trimmed[..end])
}

/// Whether `after` opens with a single capital letter and a period
fn starts_with_initial(after: &str) -> bool {
    let mut chars = after.trim_start().chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some('.')) if letter.is_uppercase()
    )
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, span: &'a str) {
    let trimmed = span.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

impl Segmenter for RuleSegmenter {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            if !is_terminator(ch) {
                continue;
            }

            // Consume the whole terminator run ("?!", "...")
            let mut end = pos + ch.len_utf8();
            let mut run_len = 1;
            while let Some(&(next_pos, next_ch)) = chars.peek() {
                if !is_terminator(next_ch) {
                    break;
                }
                end = next_pos + next_ch.len_utf8();
                run_len += 1;
                chars.next();
            }

            let followed_by_space = chars.peek().map_or(true, |&(_, c)| c.is_whitespace());
            if !followed_by_space {
                continue;
            }

            if run_len == 1
                && ch == '.'
                && self.closes_abbreviation(&text[start..pos], &text[end..])
            {
                continue;
            }

            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            split_chunk(chunk, &mut tokens);
        }
        tokens
    }
}

/// Tokenize one whitespace-free chunk
fn split_chunk<'a>(chunk: &'a str, tokens: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = chunk.char_indices().collect();
    let mut word_start: Option<usize> = None;

    for (i, &(pos, ch)) in chars.iter().enumerate() {
        if is_word_char(ch) {
            word_start.get_or_insert(pos);
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(i + 1).map(|&(_, c)| c);

        if let Some(start) = word_start {
            let joins = match ch {
                // 3.14, 25,000
                '.' | ',' => {
                    prev.is_some_and(|c| c.is_ascii_digit())
                        && next.is_some_and(|c| c.is_ascii_digit())
                }
                // long-term
                '-' => next.is_some_and(is_word_char),
                _ => false,
            };
            if joins {
                continue;
            }

            tokens.push(&chunk[start..pos]);

            // Clitic: don't -> don, 't
            if ch == '\'' && next.is_some_and(is_word_char) {
                word_start = Some(pos);
                continue;
            }
            word_start = None;
        }

        tokens.push(&chunk[pos..pos + ch.len_utf8()]);
    }

    if let Some(start) = word_start {
        tokens.push(&chunk[start..]);
    }
}
