//! Structure - headings, lists, paragraphs, intro and conclusion

use super::DimensionRule;
use crate::analyzer::patterns::{CONCLUSION_CUES, H2, INTRO_CUES, LIST_ITEM};
use crate::analyzer::text::{contains_any, head_chars, paragraph_count, tail_chars, ContentText};
use crate::Dimension;

const BASE: f64 = 5.0;
const MANY_SUBHEADINGS_BONUS: f64 = 2.0;
const TWO_SUBHEADINGS_BONUS: f64 = 1.0;
const LIST_BONUS: f64 = 1.0;
const PARAGRAPHS_BONUS: f64 = 1.0;
const MIN_PARAGRAPHS: usize = 5;
const BOOKEND_BONUS: f64 = 0.5;
/// Intro/conclusion cues are only looked for in texts longer than this
const BOOKEND_MIN_CHARS: usize = 500;
const BOOKEND_WINDOW_CHARS: usize = 200;

/// Rule scoring how well the content is organized
pub struct StructureRule;

impl DimensionRule for StructureRule {
    fn dimension(&self) -> Dimension {
        Dimension::Structure
    }

    fn score(&self, content: &ContentText) -> f64 {
        let mut score = BASE;

        let h2_count = H2.find_iter(content.raw).count();
        if h2_count >= 3 {
            score += MANY_SUBHEADINGS_BONUS;
        } else if h2_count == 2 {
            score += TWO_SUBHEADINGS_BONUS;
        }

        if LIST_ITEM.is_match(content.raw) {
            score += LIST_BONUS;
        }

        if paragraph_count(content.raw) >= MIN_PARAGRAPHS {
            score += PARAGRAPHS_BONUS;
        }

        if content.char_count() > BOOKEND_MIN_CHARS {
            let opening = head_chars(content.raw, BOOKEND_WINDOW_CHARS).to_lowercase();
            if contains_any(&opening, INTRO_CUES) {
                score += BOOKEND_BONUS;
            }
            let closing = tail_chars(content.raw, BOOKEND_WINDOW_CHARS).to_lowercase();
            if contains_any(&closing, CONCLUSION_CUES) {
                score += BOOKEND_BONUS;
            }
        }

        score.min(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        StructureRule.score(&ContentText::new(text))
    }

    #[test]
    fn test_baseline() {
        assert_eq!(score(""), 5.0);
    }

    #[test]
    fn test_subheading_bonus() {
        assert_eq!(score("## One\ntext\n## Two\ntext"), 6.0);
        assert_eq!(score("## One\n## Two\n## Three"), 7.0);
        // level-3 headings do not count
        assert_eq!(score("### One\n### Two\n### Three"), 5.0);
    }

    #[test]
    fn test_lists_and_paragraphs() {
        assert_eq!(score("Intro\n- first\n- second"), 6.0);
        assert_eq!(score("a\n\nb\n\nc\n\nd\n\ne"), 6.0);
    }

    #[test]
    fn test_bookends_only_for_long_text() {
        let short = "Today we talk. In conclusion, done.";
        assert_eq!(score(short), 5.0);

        let long = format!("Today we look at pipelines. {} In conclusion, ship it.", "word ".repeat(120));
        assert_eq!(score(&long), 6.0);
    }
}
