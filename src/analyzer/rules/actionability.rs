//! Actionability - can the reader do something with this?

use super::DimensionRule;
use crate::analyzer::patterns::{ACTION_WORDS, ARTICLE_CTA_WORDS, NUMBERED_ITEM, PRACTICAL_CUES};
use crate::analyzer::text::ContentText;
use crate::Dimension;

const BASE: f64 = 5.0;
const PER_ACTION_WORD: f64 = 0.5;
const MAX_ACTION_BONUS: f64 = 2.0;
const STEPS_BONUS: f64 = 1.5;
const PRACTICAL_BONUS: f64 = 1.0;
const CTA_BONUS: f64 = 0.5;

/// Rule rewarding action verbs, step-by-step instructions and calls to action
pub struct ActionabilityRule;

impl DimensionRule for ActionabilityRule {
    fn dimension(&self) -> Dimension {
        Dimension::Actionability
    }

    fn score(&self, content: &ContentText) -> f64 {
        let mut score = BASE;

        let action_hits = content.count_mentioned(ACTION_WORDS);
        score += (action_hits as f64 * PER_ACTION_WORD).min(MAX_ACTION_BONUS);

        if content.lower.contains("step") || NUMBERED_ITEM.is_match(content.raw) {
            score += STEPS_BONUS;
        }
        if content.mentions_any(PRACTICAL_CUES) {
            score += PRACTICAL_BONUS;
        }
        if content.mentions_any(ARTICLE_CTA_WORDS) {
            score += CTA_BONUS;
        }

        score.min(10.0)
    }
}
