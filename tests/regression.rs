//! Regression tests: baseline scores for known inputs.
//! Update baselines intentionally when the heuristic tables change.

use contentblitz::analyzer::{ContentScorer, SeoOptimizer};
use contentblitz::{ContentType, Dimension, Grade};

macro_rules! regression {
    ($name:ident, $text:expr, $content_type:expr, $overall:expr, $grade:expr) => {
        #[test]
        fn $name() {
            let r = ContentScorer::new().score($text, $content_type);
            assert_eq!(
                r.overall_score(),
                $overall,
                "{:?} overall changed from baseline",
                $content_type
            );
            assert_eq!(r.grade(), $grade, "{:?} grade changed", $content_type);
        }
    };
}

// Empty input degenerates to the baseline of each dimension
regression!(empty_general, "", ContentType::General, 6.7, Grade::BMinus);
regression!(empty_blog, "", ContentType::Blog, 6.0, Grade::CPlus);
regression!(empty_short_form, "", ContentType::ShortForm, 5.8, Grade::C);

#[test]
fn empty_general_dimension_baselines() {
    let r = ContentScorer::new().score("", ContentType::General);
    assert_eq!(r.dimension_scores.len(), 3);
    assert_eq!(r.dimension_scores.get(Dimension::Clarity), Some(7.0));
    assert_eq!(r.dimension_scores.get(Dimension::Engagement), Some(5.0));
    assert_eq!(r.dimension_scores.get(Dimension::Professionalism), Some(8.0));
}

#[test]
fn short_form_engagement_potential_bonuses() {
    // three breaks, one question, one hashtag, one engagement prompt
    let post = "Big news today?\n\nShipping matters.\n\nTeams grow.\n\n#launch comment below";
    let r = ContentScorer::new().score(post, ContentType::ShortForm);
    assert_eq!(
        r.dimension_scores.get(Dimension::EngagementPotential),
        Some(9.0)
    );
}

#[test]
fn keyword_stuffing_baseline() {
    let r = SeoOptimizer::new().analyze(
        "# Title\n\nAI is transforming marketing. AI AI AI AI AI AI AI AI.",
        &["AI"],
    );
    assert_eq!(r.word_count, 13);
    assert_eq!(r.keyword_analysis.get("AI").unwrap().count, 9);
    assert_eq!(r.seo_score, 45);
    assert_eq!(r.recommendations.len(), 6);
}

#[test]
fn empty_text_seo_baseline() {
    let r = SeoOptimizer::new().analyze("", &["rust"]);
    assert_eq!(r.word_count, 0);
    assert_eq!(r.seo_score, 55);
    assert_eq!(r.recommendations.len(), 5);
}
