//! SEO Optimizer - keyword usage, readability, heading structure and a 0-100 score

use super::patterns::{H1, H2, H3, HEADING, LINK, LIST_ITEM};
use super::text::{self, head_chars, round_to};
use crate::{
    KeywordAnalysis, KeywordStat, KeywordStatus, Readability, ReadabilityLevel, SeoReport,
    StructureStats,
};

/// Keyword density band (percent) considered optimal
const IDEAL_DENSITY: (f64, f64) = (1.0, 2.5);
/// Chars of the lowercased text searched for "first paragraph" placement
const FIRST_PARAGRAPH_CHARS: usize = 500;

const RECOMMENDED_WORDS: usize = 800;
const SHORT_CONTENT_WORDS: usize = 500;
const MIN_LINKS: usize = 2;
const MIN_H2: usize = 2;

const EASY_MAX_SENTENCE: f64 = 15.0;
const MODERATE_MAX_SENTENCE: f64 = 20.0;

const VERY_SHORT_PENALTY: i32 = 30;
const SHORT_PENALTY: i32 = 15;
const MISSING_KEYWORD_PENALTY: i32 = 20;
const OFF_DENSITY_PENALTY: i32 = 10;
const NOT_IN_FIRST_PARAGRAPH_PENALTY: i32 = 5;
const HIERARCHY_PENALTY: i32 = 10;
const FEW_LINKS_PENALTY: i32 = 5;

/// Analyzes finished content against a list of target keywords
pub struct SeoOptimizer;

impl SeoOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze `text` for the given keywords. Never fails.
    pub fn analyze<S: AsRef<str>>(&self, text: &str, keywords: &[S]) -> SeoReport {
        let word_count = text::word_count(text);
        let keyword_analysis = analyze_keywords(text, keywords, word_count);
        let readability = analyze_readability(text, word_count);
        let structure = analyze_structure(text);

        let recommendations =
            recommendations(word_count, &keyword_analysis, &structure, &readability);
        let seo_score = seo_score(word_count, &keyword_analysis, &structure);

        SeoReport {
            word_count,
            keyword_analysis,
            readability,
            structure,
            recommendations,
            seo_score,
        }
    }
}

impl Default for SeoOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

fn analyze_keywords<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
    word_count: usize,
) -> KeywordAnalysis {
    let lower = text.to_lowercase();
    let first_paragraph = head_chars(&lower, FIRST_PARAGRAPH_CHARS);
    let headings: Vec<String> = HEADING
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect();

    let mut analysis = KeywordAnalysis::default();
    for keyword in keywords {
        let keyword = keyword.as_ref();
        let needle = keyword.to_lowercase();
        let count = lower.matches(needle.as_str()).count();
        let density = if word_count > 0 {
            count as f64 / word_count as f64 * 100.0
        } else {
            0.0
        };

        analysis.push(KeywordStat {
            keyword: keyword.to_string(),
            count,
            density: round_to(density, 2),
            in_first_paragraph: first_paragraph.contains(needle.as_str()),
            in_headings: headings.iter().any(|h| h.contains(needle.as_str())),
            status: keyword_status(density, count),
        });
    }
    analysis
}

/// Judge keyword usage from the unrounded density
fn keyword_status(density: f64, count: usize) -> KeywordStatus {
    if count == 0 {
        KeywordStatus::Missing
    } else if density < IDEAL_DENSITY.0 {
        KeywordStatus::TooLow
    } else if density > IDEAL_DENSITY.1 {
        KeywordStatus::TooHigh
    } else {
        KeywordStatus::Optimal
    }
}

fn analyze_readability(text: &str, word_count: usize) -> Readability {
    let sentence_count = text::sentences(text).len();
    let average = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let readability_level = if average < EASY_MAX_SENTENCE {
        ReadabilityLevel::Easy
    } else if average < MODERATE_MAX_SENTENCE {
        ReadabilityLevel::Moderate
    } else {
        ReadabilityLevel::Difficult
    };

    Readability {
        sentence_count,
        avg_sentence_length: round_to(average, 1),
        readability_level,
        paragraph_count: text::paragraph_count(text),
    }
}

fn analyze_structure(text: &str) -> StructureStats {
    let h1_count = H1.find_iter(text).count();
    let h2_count = H2.find_iter(text).count();

    StructureStats {
        h1_count,
        h2_count,
        h3_count: H3.find_iter(text).count(),
        has_lists: LIST_ITEM.is_match(text),
        link_count: LINK.find_iter(text).count(),
        has_proper_hierarchy: h1_count == 1 && h2_count >= MIN_H2,
    }
}

fn recommendations(
    word_count: usize,
    keywords: &KeywordAnalysis,
    structure: &StructureStats,
    readability: &Readability,
) -> Vec<String> {
    let mut out = Vec::new();

    if word_count < RECOMMENDED_WORDS {
        out.push(
            "Content is too short. Aim for at least 800 words for better SEO.".to_string(),
        );
    }

    for stat in keywords.iter() {
        let k = &stat.keyword;
        match stat.status {
            KeywordStatus::Missing => {
                out.push(format!("Keyword '{}' is not present. Add it naturally.", k))
            }
            KeywordStatus::TooLow => out.push(format!(
                "Keyword '{}' density is too low. Use it more frequently.",
                k
            )),
            KeywordStatus::TooHigh => out.push(format!(
                "Keyword '{}' density is too high. Reduce usage to avoid keyword stuffing.",
                k
            )),
            KeywordStatus::Optimal => {}
        }
        if !stat.in_first_paragraph {
            out.push(format!("Include '{}' in the first paragraph.", k));
        }
        if !stat.in_headings {
            out.push(format!("Use '{}' in at least one heading.", k));
        }
    }

    if structure.h1_count == 0 {
        out.push("Add an H1 heading (title).".to_string());
    } else if structure.h1_count > 1 {
        out.push("Use only one H1 heading.".to_string());
    }
    if structure.h2_count < MIN_H2 {
        out.push("Add more H2 subheadings to improve structure.".to_string());
    }
    if !structure.has_lists {
        out.push("Consider adding bullet points or lists for better readability.".to_string());
    }
    if structure.link_count < MIN_LINKS {
        out.push("Add internal and external links to improve SEO.".to_string());
    }

    if readability.readability_level == ReadabilityLevel::Difficult {
        out.push("Simplify sentence structure for better readability.".to_string());
    }

    out
}

fn seo_score(word_count: usize, keywords: &KeywordAnalysis, structure: &StructureStats) -> u8 {
    let mut score: i32 = 100;

    if word_count < SHORT_CONTENT_WORDS {
        score -= VERY_SHORT_PENALTY;
    } else if word_count < RECOMMENDED_WORDS {
        score -= SHORT_PENALTY;
    }

    for stat in keywords.iter() {
        match stat.status {
            KeywordStatus::Missing => score -= MISSING_KEYWORD_PENALTY,
            KeywordStatus::TooLow | KeywordStatus::TooHigh => score -= OFF_DENSITY_PENALTY,
            KeywordStatus::Optimal => {}
        }
        if !stat.in_first_paragraph {
            score -= NOT_IN_FIRST_PARAGRAPH_PENALTY;
        }
    }

    if !structure.has_proper_hierarchy {
        score -= HIERARCHY_PENALTY;
    }
    if structure.link_count < MIN_LINKS {
        score -= FEW_LINKS_PENALTY;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str, keywords: &[&str]) -> SeoReport {
        SeoOptimizer::new().analyze(text, keywords)
    }

    /// A well-formed article of `words` words with the keyword at 2% density
    fn article(words: usize) -> String {
        let mut text = String::from(
            "# Rust tips\n\n## Setup\n\n## Usage\n\n- one\n- two\n\nSee [a](/a) and [b](/b).\n\n",
        );
        let header_words = text::word_count(&text);
        let mut body = Vec::new();
        for i in 0..words.saturating_sub(header_words) {
            body.push(if i % 50 == 0 { "rust" } else { "word" });
        }
        text.push_str(&body.join(" "));
        text.push('.');
        text
    }

    #[test]
    fn test_keyword_stuffing_example() {
        let report = analyze(
            "# Title\n\nAI is transforming marketing. AI AI AI AI AI AI AI AI.",
            &["AI"],
        );
        let stat = report.keyword_analysis.get("AI").unwrap();
        assert_eq!(report.word_count, 13);
        assert_eq!(stat.count, 9);
        assert_eq!(stat.density, 69.23);
        assert_eq!(stat.status, KeywordStatus::TooHigh);
        assert!(stat.in_first_paragraph);
        assert!(!stat.in_headings);
        assert!(!report.structure.has_proper_hierarchy);
        assert_eq!(report.structure.h1_count, 1);
        // 100 - 30 short - 10 density - 10 hierarchy - 5 links
        assert_eq!(report.seo_score, 45);
        assert_eq!(
            report.recommendations,
            vec![
                "Content is too short. Aim for at least 800 words for better SEO.",
                "Keyword 'AI' density is too high. Reduce usage to avoid keyword stuffing.",
                "Use 'AI' in at least one heading.",
                "Add more H2 subheadings to improve structure.",
                "Consider adding bullet points or lists for better readability.",
                "Add internal and external links to improve SEO.",
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        let report = analyze("", &[]);
        assert_eq!(report.word_count, 0);
        assert!(report.keyword_analysis.is_empty());
        assert_eq!(report.readability.sentence_count, 0);
        assert_eq!(report.readability.avg_sentence_length, 0.0);
        assert_eq!(report.readability.readability_level, ReadabilityLevel::Easy);
        assert_eq!(report.readability.paragraph_count, 1);
        assert_eq!(report.seo_score, 55);
        assert_eq!(report.recommendations.len(), 5);
        assert_eq!(report.recommendations[1], "Add an H1 heading (title).");
    }

    #[test]
    fn test_missing_keyword_with_no_words() {
        let report = analyze("", &["rust"]);
        let stat = report.keyword_analysis.get("rust").unwrap();
        assert_eq!(stat.count, 0);
        assert_eq!(stat.density, 0.0);
        assert_eq!(stat.status, KeywordStatus::Missing);
        // 55 - 20 missing - 5 first paragraph
        assert_eq!(report.seo_score, 30);
        assert!(report
            .recommendations
            .contains(&"Keyword 'rust' is not present. Add it naturally.".to_string()));
        assert!(report
            .recommendations
            .contains(&"Include 'rust' in the first paragraph.".to_string()));
    }

    #[test]
    fn test_well_formed_article_scores_full_marks() {
        let text = article(1000);
        let report = analyze(&text, &["Rust"]);
        let stat = report.keyword_analysis.get("Rust").unwrap();
        assert_eq!(stat.status, KeywordStatus::Optimal);
        assert!(stat.in_headings);
        assert!(report.structure.has_proper_hierarchy);
        assert!(report.structure.has_lists);
        assert_eq!(report.structure.link_count, 2);
        assert_eq!(report.seo_score, 100);
        assert!(report
            .recommendations
            .contains(&"Simplify sentence structure for better readability.".to_string()));
    }

    #[test]
    fn test_too_low_density() {
        let text = format!("rust {}", "word ".repeat(199));
        let report = analyze(&text, &["rust"]);
        let stat = report.keyword_analysis.get("rust").unwrap();
        assert_eq!(stat.density, 0.5);
        assert_eq!(stat.status, KeywordStatus::TooLow);
    }

    #[test]
    fn test_density_rounds_ties_to_even() {
        // 1 in 32 words is 3.125%
        let text = format!("rust{}", " word".repeat(31));
        let report = analyze(&text, &["rust"]);
        assert_eq!(report.word_count, 32);
        let stat = report.keyword_analysis.get("rust").unwrap();
        assert_eq!(stat.density, 3.12);
        assert_eq!(stat.status, KeywordStatus::TooHigh);
    }

    #[test]
    fn test_avg_sentence_length_rounds_ties_to_even() {
        // 9 words over 4 sentences is 2.25
        let report = analyze("a b. c d. e f. g h i.", &["a"]);
        assert_eq!(report.readability.sentence_count, 4);
        assert_eq!(report.readability.avg_sentence_length, 2.2);
    }

    #[test]
    fn test_density_boundaries_are_inclusive() {
        // 1 in 100 words is exactly 1.0%
        let text = format!("rust {}", "word ".repeat(99));
        let report = analyze(&text, &["rust"]);
        assert_eq!(
            report.keyword_analysis.get("rust").unwrap().status,
            KeywordStatus::Optimal
        );

        // 1 in 40 words is exactly 2.5%
        let text = format!("rust {}", "word ".repeat(39));
        let report = analyze(&text, &["rust"]);
        assert_eq!(
            report.keyword_analysis.get("rust").unwrap().status,
            KeywordStatus::Optimal
        );
    }

    #[test]
    fn test_keyword_counting_is_substring_based() {
        let report = analyze("She said it again.", &["ai"]);
        assert_eq!(report.keyword_analysis.get("ai").unwrap().count, 2);
    }

    #[test]
    fn test_keyword_outside_first_paragraph_window() {
        let text = format!("{} rust", "a".repeat(600));
        let report = analyze(&text, &["rust"]);
        assert!(!report.keyword_analysis.get("rust").unwrap().in_first_paragraph);
    }

    #[test]
    fn test_duplicate_keywords_collapse() {
        let report = analyze("rust and go", &["rust", "go", "rust"]);
        assert_eq!(report.keyword_analysis.len(), 2);
        let names: Vec<_> = report
            .keyword_analysis
            .iter()
            .map(|s| s.keyword.as_str())
            .collect();
        assert_eq!(names, vec!["rust", "go"]);
    }

    #[test]
    fn test_multiple_h1_recommendation() {
        let report = analyze("# One\n# Two\n## A\n## B", &[]);
        assert_eq!(report.structure.h1_count, 2);
        assert!(!report.structure.has_proper_hierarchy);
        assert!(report
            .recommendations
            .contains(&"Use only one H1 heading.".to_string()));
    }

    #[test]
    fn test_readability_levels() {
        let moderate = format!("{}.", "word ".repeat(17));
        assert_eq!(
            analyze(&moderate, &[]).readability.readability_level,
            ReadabilityLevel::Moderate
        );
        let difficult = format!("{}.", "word ".repeat(20));
        assert_eq!(
            analyze(&difficult, &[]).readability.readability_level,
            ReadabilityLevel::Difficult
        );
    }

    #[test]
    fn test_score_is_clamped_at_zero() {
        let keywords = ["a", "b", "c", "d", "e"];
        let report = analyze("nothing here", &keywords[..]);
        assert_eq!(report.seo_score, 0);
    }

    #[test]
    fn test_serialization_shape() {
        let report = analyze("# Title\n\nRust rocks.", &["rust"]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["keyword_analysis"]["rust"]["status"], "too_high");
        assert_eq!(json["readability"]["readability_level"], "easy");
        assert!(json["structure"]["has_proper_hierarchy"].is_boolean());
        assert!(json["keyword_analysis"]["rust"].get("keyword").is_none());
    }
}
