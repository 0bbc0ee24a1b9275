//! Text helpers shared by the scoring rules and the SEO optimizer.
//!
//! Positions and lengths are measured in chars (Unicode scalar values), not bytes.

use super::patterns::{SENTENCE_BREAK, WORD};

/// Text under analysis with its lowercased form computed once
pub struct ContentText<'a> {
    /// Original text
    pub raw: &'a str,
    /// Lowercased text, for case-insensitive word table lookups
    pub lower: String,
}

impl<'a> ContentText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    /// True if the lowercased text contains any of the needles
    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        contains_any(&self.lower, needles)
    }

    /// Number of distinct needles found in the lowercased text
    pub fn count_mentioned(&self, needles: &[&str]) -> usize {
        needles.iter().filter(|n| self.lower.contains(*n)).count()
    }

    pub fn char_count(&self) -> usize {
        self.raw.chars().count()
    }
}

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Number of `\b\w+\b` tokens
pub fn word_count(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Non-empty trimmed fragments between runs of `.`, `!` and `?`
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Words per sentence, or None when the text has no sentences
pub fn average_sentence_length(text: &str) -> Option<f64> {
    let sentence_count = sentences(text).len();
    if sentence_count == 0 {
        return None;
    }
    Some(word_count(text) as f64 / sentence_count as f64)
}

/// Blank-line separated segments. Empty text counts as one paragraph.
pub fn paragraph_count(text: &str) -> usize {
    text.split("\n\n").count()
}

/// Text up to the first newline
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}

/// First `n` chars
pub fn head_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Last `n` chars
pub fn tail_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Round to a fixed number of decimal places, ties to even
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
