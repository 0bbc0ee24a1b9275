//! Overall score, strengths and improvements derived from dimension scores

use super::text::round_to;
use crate::{DimensionScores, Grade};

/// Dimensions at or above this score are listed as strengths
const STRENGTH_THRESHOLD: f64 = 8.0;
/// Dimensions below this score are listed as improvements
const IMPROVEMENT_THRESHOLD: f64 = 6.0;

const NO_STRENGTHS: &str = "Good baseline quality";
const NO_IMPROVEMENTS: &str = "Minor refinements only";

/// Calculator for derived content quality figures
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Mean of the dimension scores, rounded to one decimal
    pub fn overall(scores: &DimensionScores) -> f64 {
        round_to(scores.mean(), 1)
    }

    pub fn grade(scores: &DimensionScores) -> Grade {
        Grade::from_score(Self::overall(scores))
    }

    /// Title-cased names of high-scoring dimensions, in dimension order
    pub fn strengths(scores: &DimensionScores) -> Vec<String> {
        let strengths: Vec<String> = scores
            .iter()
            .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
            .map(|(dimension, _)| dimension.label())
            .collect();

        if strengths.is_empty() {
            vec![NO_STRENGTHS.to_string()]
        } else {
            strengths
        }
    }

    /// "Improve <dimension>" for each low-scoring dimension, in dimension order
    pub fn improvements(scores: &DimensionScores) -> Vec<String> {
        let improvements: Vec<String> = scores
            .iter()
            .filter(|(_, score)| *score < IMPROVEMENT_THRESHOLD)
            .map(|(dimension, _)| format!("Improve {}", dimension.as_str().replace('_', " ")))
            .collect();

        if improvements.is_empty() {
            vec![NO_IMPROVEMENTS.to_string()]
        } else {
            improvements
        }
    }

    /// Get a description of the grade
    pub fn grade_description(grade: Grade) -> &'static str {
        match grade {
            Grade::APlus | Grade::A => "Excellent - ready to publish",
            Grade::AMinus | Grade::BPlus => "Strong - a light edit will polish it",
            Grade::B | Grade::BMinus => "Good - solid draft with room for improvement",
            Grade::CPlus | Grade::C => "Fair - needs another revision pass",
            Grade::CMinus => "Weak - rework before publishing",
        }
    }
}
