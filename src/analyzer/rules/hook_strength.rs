//! Hook strength - how well the first line of a post grabs attention.
//! Only the first line (up to the first newline) is considered.

use super::DimensionRule;
use crate::analyzer::patterns::{BOLD_CLAIM_WORDS, PERCENT_SIGN};
use crate::analyzer::text::{contains_any, first_line, ContentText};
use crate::Dimension;

const BASE: f64 = 5.0;
const QUESTION_BONUS: f64 = 2.0;
const STATISTIC_BONUS: f64 = 2.0;
const BOLD_CLAIM_BONUS: f64 = 1.0;
const CONCISE_BONUS: f64 = 1.0;
const CONCISE_MAX_CHARS: usize = 100;

pub struct HookStrengthRule;

impl DimensionRule for HookStrengthRule {
    fn dimension(&self) -> Dimension {
        Dimension::HookStrength
    }

    fn score(&self, content: &ContentText) -> f64 {
        let hook = first_line(content.raw);
        let mut score = BASE;

        if hook.trim().ends_with('?') {
            score += QUESTION_BONUS;
        }
        if PERCENT_SIGN.is_match(hook) {
            score += STATISTIC_BONUS;
        }
        if contains_any(&hook.to_lowercase(), BOLD_CLAIM_WORDS) {
            score += BOLD_CLAIM_BONUS;
        }
        if hook.chars().count() < CONCISE_MAX_CHARS {
            score += CONCISE_BONUS;
        }

        score.min(10.0)
    }
}
