//! Engagement - questions, stories, examples, numbers and emotion

use super::DimensionRule;
use crate::analyzer::patterns::{EMOTION_WORDS, EXAMPLE_CUES, PERCENTAGE, STORY_WORDS};
use crate::analyzer::text::ContentText;
use crate::Dimension;

const BASE: f64 = 5.0;
const QUESTION_BONUS: f64 = 1.0;
const STORY_BONUS: f64 = 1.0;
const EXAMPLE_BONUS: f64 = 0.5;
const STATISTIC_BONUS: f64 = 1.0;
const EMOTION_BONUS: f64 = 0.5;

/// Rule scoring how likely a reader is to stay engaged
pub struct EngagementRule;

impl DimensionRule for EngagementRule {
    fn dimension(&self) -> Dimension {
        Dimension::Engagement
    }

    fn score(&self, content: &ContentText) -> f64 {
        let mut score = BASE;

        if content.raw.contains('?') {
            score += QUESTION_BONUS;
        }
        if content.mentions_any(STORY_WORDS) {
            score += STORY_BONUS;
        }
        if content.mentions_any(EXAMPLE_CUES) {
            score += EXAMPLE_BONUS;
        }
        if PERCENTAGE.is_match(content.raw) {
            score += STATISTIC_BONUS;
        }
        if content.mentions_any(EMOTION_WORDS) {
            score += EMOTION_BONUS;
        }

        score.min(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        EngagementRule.score(&ContentText::new(text))
    }

    #[test]
    fn test_baseline() {
        assert_eq!(score(""), 5.0);
        assert_eq!(score("Plain statement."), 5.0);
    }

    #[test]
    fn test_question_and_story() {
        assert_eq!(score("Ever wondered why? Here is my Story."), 7.0);
    }

    #[test]
    fn test_statistics_forms() {
        assert_eq!(score("Sales grew 40%."), 6.0);
        assert_eq!(score("Sales grew 40 percent."), 6.0);
        assert_eq!(score("Sales grew forty percent."), 5.0);
    }

    #[test]
    fn test_all_signals_reach_nine() {
        let text = "What happened? I learned a lot. For instance, 30% of us were excited.";
        assert_eq!(score(text), 9.0);
    }
}
