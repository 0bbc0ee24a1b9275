//! Engagement potential of a short-form post

use super::DimensionRule;
use crate::analyzer::patterns::{ENGAGEMENT_PROMPTS, PERSONAL_PRONOUNS};
use crate::analyzer::text::ContentText;
use crate::Dimension;

const BASE: f64 = 5.0;
/// Posts need breathing room between blocks
const MIN_BREAKS: usize = 3;
const BREAKS_BONUS: f64 = 1.5;
const QUESTION_BONUS: f64 = 1.0;
const PRONOUN_BONUS: f64 = 1.0;
const HASHTAG_BONUS: f64 = 0.5;
const PROMPT_BONUS: f64 = 1.0;

pub struct EngagementPotentialRule;

impl DimensionRule for EngagementPotentialRule {
    fn dimension(&self) -> Dimension {
        Dimension::EngagementPotential
    }

    fn score(&self, content: &ContentText) -> f64 {
        let mut score = BASE;

        if content.raw.matches("\n\n").count() >= MIN_BREAKS {
            score += BREAKS_BONUS;
        }
        if content.raw.contains('?') {
            score += QUESTION_BONUS;
        }
        if content.mentions_any(PERSONAL_PRONOUNS) {
            score += PRONOUN_BONUS;
        }
        if content.raw.contains('#') {
            score += HASHTAG_BONUS;
        }
        if content.mentions_any(ENGAGEMENT_PROMPTS) {
            score += PROMPT_BONUS;
        }

        score.min(10.0)
    }
}
