//! Call to action - does the post ask the reader to do something, ideally at the end?

use super::DimensionRule;
use crate::analyzer::patterns::POST_CTA_PHRASES;
use crate::analyzer::text::{contains_any, tail_chars, ContentText};
use crate::Dimension;

const BASE: f64 = 5.0;
const PER_PHRASE: f64 = 1.5;
const MAX_PHRASE_BONUS: f64 = 3.0;
const CLOSING_BONUS: f64 = 2.0;
const CLOSING_WINDOW_CHARS: usize = 200;

pub struct CallToActionRule;

impl DimensionRule for CallToActionRule {
    fn dimension(&self) -> Dimension {
        Dimension::CallToAction
    }

    fn score(&self, content: &ContentText) -> f64 {
        let mut score = BASE;

        let phrases = content.count_mentioned(POST_CTA_PHRASES);
        score += (phrases as f64 * PER_PHRASE).min(MAX_PHRASE_BONUS);

        let closing = tail_chars(content.raw, CLOSING_WINDOW_CHARS).to_lowercase();
        if contains_any(&closing, POST_CTA_PHRASES) {
            score += CLOSING_BONUS;
        }

        score.min(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        CallToActionRule.score(&ContentText::new(text))
    }

    #[test]
    fn test_baseline() {
        assert_eq!(score(""), 5.0);
        assert_eq!(score("We shipped a thing."), 5.0);
    }

    #[test]
    fn test_single_phrase_at_end() {
        assert_eq!(score("We shipped a thing. Follow for more."), 8.5);
    }

    #[test]
    fn test_phrase_bonus_capped() {
        assert_eq!(score("Comment, share, follow and join us."), 10.0);
    }

    #[test]
    fn test_phrase_outside_closing_window() {
        let text = format!("Let me know below. {}", "filler ".repeat(40));
        assert_eq!(score(&text), 6.5);
    }
}
