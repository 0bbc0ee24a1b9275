//! Clarity - sentence length and transitions

use super::DimensionRule;
use crate::analyzer::patterns::TRANSITION_WORDS;
use crate::analyzer::text::{average_sentence_length, ContentText};
use crate::Dimension;

const BASE: f64 = 7.0;
const VERY_LONG_SENTENCES: f64 = 25.0;
const VERY_LONG_PENALTY: f64 = 2.0;
const LONG_SENTENCES: f64 = 20.0;
const LONG_PENALTY: f64 = 1.0;
const CONCISE_SENTENCES: f64 = 15.0;
const CONCISE_BONUS: f64 = 1.0;
const TRANSITION_BONUS: f64 = 1.0;

pub struct ClarityRule;

impl DimensionRule for ClarityRule {
    fn dimension(&self) -> Dimension {
        Dimension::Clarity
    }

    fn score(&self, content: &ContentText) -> f64 {
        let mut score = BASE;

        if let Some(avg) = average_sentence_length(content.raw) {
            if avg > VERY_LONG_SENTENCES {
                score -= VERY_LONG_PENALTY;
            } else if avg > LONG_SENTENCES {
                score -= LONG_PENALTY;
            }
            if avg < CONCISE_SENTENCES {
                score += CONCISE_BONUS;
            }
        }

        if content.mentions_any(TRANSITION_WORDS) {
            score += TRANSITION_BONUS;
        }

        score.clamp(0.0, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        ClarityRule.score(&ContentText::new(text))
    }

    #[test]
    fn test_empty_text_keeps_baseline() {
        assert_eq!(score(""), 7.0);
    }

    #[test]
    fn test_concise_sentences_rewarded() {
        assert_eq!(score("Short one. Another short one."), 8.0);
    }

    #[test]
    fn test_transitions_rewarded() {
        assert_eq!(score("Short one. However, it works."), 9.0);
    }

    #[test]
    fn test_long_sentences_penalized() {
        let moderate = format!("{}.", "word ".repeat(22));
        assert_eq!(score(&moderate), 6.0);

        let long = format!("{}.", "word ".repeat(30));
        assert_eq!(score(&long), 5.0);
    }

    #[test]
    fn test_middle_band_unchanged() {
        let text = format!("{}.", "word ".repeat(18));
        assert_eq!(score(&text), 7.0);
    }
}
