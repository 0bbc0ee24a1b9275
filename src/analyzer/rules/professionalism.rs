//! Professionalism - exclamation marks, shouting, proper title

use super::DimensionRule;
use crate::analyzer::patterns::{H1, SHOUTED_WORD};
use crate::analyzer::text::ContentText;
use crate::Dimension;

const BASE: f64 = 8.0;
const MANY_EXCLAMATIONS: usize = 5;
const MANY_EXCLAMATIONS_PENALTY: f64 = 2.0;
const SOME_EXCLAMATIONS: usize = 3;
const SOME_EXCLAMATIONS_PENALTY: f64 = 1.0;
/// All-caps words of 4+ letters tolerated before penalizing (acronyms)
const MAX_SHOUTED_WORDS: usize = 3;
const SHOUTING_PENALTY: f64 = 1.0;
const TITLE_BONUS: f64 = 1.0;

pub struct ProfessionalismRule;

impl DimensionRule for ProfessionalismRule {
    fn dimension(&self) -> Dimension {
        Dimension::Professionalism
    }

    fn score(&self, content: &ContentText) -> f64 {
        let mut score = BASE;

        let exclamations = content.raw.matches('!').count();
        if exclamations > MANY_EXCLAMATIONS {
            score -= MANY_EXCLAMATIONS_PENALTY;
        } else if exclamations > SOME_EXCLAMATIONS {
            score -= SOME_EXCLAMATIONS_PENALTY;
        }

        if SHOUTED_WORD.find_iter(content.raw).count() > MAX_SHOUTED_WORDS {
            score -= SHOUTING_PENALTY;
        }

        if H1.is_match(content.raw) {
            score += TITLE_BONUS;
        }

        score.clamp(0.0, 10.0)
    }
}
