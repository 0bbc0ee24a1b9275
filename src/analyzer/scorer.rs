//! Content Scorer - runs the dimension rules for a content type

use super::rules::rule_for;
use super::text::ContentText;
use crate::{ContentType, DimensionScores, ScoreReport};

/// Scores finished content across the dimensions of its content type
pub struct ContentScorer;

impl ContentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `text` as `content_type`. Never fails; empty text yields baseline scores.
    pub fn score(&self, text: &str, content_type: ContentType) -> ScoreReport {
        let content = ContentText::new(text);
        let dimension_scores: DimensionScores = content_type
            .dimensions()
            .iter()
            .map(|dimension| (*dimension, rule_for(*dimension).score(&content)))
            .collect();

        let character_count = match content_type {
            ContentType::ShortForm => Some(content.char_count()),
            ContentType::Blog | ContentType::General => None,
        };

        ScoreReport {
            content_type,
            dimension_scores,
            character_count,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl Default for ContentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, Grade};

    #[test]
    fn test_empty_general_baseline() {
        let report = ContentScorer::new().score("", ContentType::General);
        assert_eq!(report.dimension_scores.len(), 3);
        assert_eq!(report.dimension_scores.get(Dimension::Clarity), Some(7.0));
        assert_eq!(report.dimension_scores.get(Dimension::Engagement), Some(5.0));
        assert_eq!(
            report.dimension_scores.get(Dimension::Professionalism),
            Some(8.0)
        );
        assert_eq!(report.overall_score(), 6.7);
        assert_eq!(report.grade(), Grade::BMinus);
        assert!(report.character_count.is_none());
    }

    #[test]
    fn test_empty_blog_baseline() {
        let report = ContentScorer::new().score("", ContentType::Blog);
        assert_eq!(
            report.dimension_scores.dimensions().collect::<Vec<_>>(),
            ContentType::Blog.dimensions().to_vec()
        );
        // 5 + 5 + 7 + 5 + 8
        assert_eq!(report.overall_score(), 6.0);
        assert_eq!(report.grade(), Grade::CPlus);
        assert_eq!(
            report.improvements(),
            vec![
                "Improve engagement".to_string(),
                "Improve structure".to_string(),
                "Improve actionability".to_string()
            ]
        );
        assert_eq!(report.strengths(), vec!["Professionalism".to_string()]);
    }

    #[test]
    fn test_empty_short_form_baseline() {
        let report = ContentScorer::new().score("", ContentType::ShortForm);
        assert_eq!(report.dimension_scores.get(Dimension::HookStrength), Some(6.0));
        // 6 + 5 + 8 + 5 + 5 = 29 / 5
        assert_eq!(report.overall_score(), 5.8);
        assert_eq!(report.grade(), Grade::C);
        assert_eq!(report.character_count, Some(0));
    }

    #[test]
    fn test_short_form_character_count_is_chars() {
        let report = ContentScorer::new().score("héllo 🎉", ContentType::ShortForm);
        assert_eq!(report.character_count, Some(7));
    }

    #[test]
    fn test_report_serializes_derived_fields() {
        let report = ContentScorer::new().score("# Title\n\nHello?", ContentType::General);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["content_type"], "general");
        assert_eq!(json["overall_score"], report.overall_score());
        assert_eq!(json["grade"], report.grade().to_string());
        assert!(json["dimension_scores"]["clarity"].is_number());
        assert!(json["strengths"].is_array());
        assert!(json.get("character_count").is_none());
        assert!(json["timestamp"].is_string());
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::analyzer::text::round_to;
    use proptest::prelude::*;

    fn any_content_type() -> impl Strategy<Value = ContentType> {
        prop_oneof![
            Just(ContentType::Blog),
            Just(ContentType::ShortForm),
            Just(ContentType::General),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn dimension_scores_stay_in_range(ref input in "(?s).{0,600}", content_type in any_content_type()) {
            let report = ContentScorer::new().score(input, content_type);
            prop_assert_eq!(report.dimension_scores.len(), content_type.dimensions().len());
            for (_, score) in report.dimension_scores.iter() {
                prop_assert!((0.0..=10.0).contains(&score), "score {} out of range", score);
            }
            let overall = report.overall_score();
            prop_assert!((0.0..=10.0).contains(&overall));
            prop_assert_eq!(overall, round_to(report.dimension_scores.mean(), 1));
        }

        #[test]
        fn scoring_is_deterministic(ref input in "(?s).{0,400}", content_type in any_content_type()) {
            let scorer = ContentScorer::new();
            let first = scorer.score(input, content_type);
            let second = scorer.score(input, content_type);
            prop_assert_eq!(first.dimension_scores, second.dimension_scores);
            prop_assert_eq!(first.character_count, second.character_count);
        }
    }
}
