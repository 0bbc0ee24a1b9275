//! Formatting of short-form posts: line breaks, emoji use and length

use super::DimensionRule;
use crate::analyzer::patterns::EMOJI;
use crate::analyzer::text::ContentText;
use crate::Dimension;

const BASE: f64 = 5.0;
const BREAKS_BONUS: f64 = 2.0;
const MODERATE_EMOJI_MAX: usize = 5;
const MODERATE_EMOJI_BONUS: f64 = 1.5;
const EXCESSIVE_EMOJI: usize = 10;
const EXCESSIVE_EMOJI_PENALTY: f64 = 1.0;
const IDEAL_MIN_CHARS: usize = 500;
const IDEAL_MAX_CHARS: usize = 2000;
const IDEAL_LENGTH_BONUS: f64 = 1.5;
const TOO_LONG_CHARS: usize = 3000;
const TOO_LONG_PENALTY: f64 = 1.0;

pub struct FormattingRule;

impl DimensionRule for FormattingRule {
    fn dimension(&self) -> Dimension {
        Dimension::Formatting
    }

    fn score(&self, content: &ContentText) -> f64 {
        let mut score = BASE;

        if content.raw.contains("\n\n") {
            score += BREAKS_BONUS;
        }

        let emoji = EMOJI.find_iter(content.raw).count();
        if (1..=MODERATE_EMOJI_MAX).contains(&emoji) {
            score += MODERATE_EMOJI_BONUS;
        } else if emoji > EXCESSIVE_EMOJI {
            score -= EXCESSIVE_EMOJI_PENALTY;
        }

        let chars = content.char_count();
        if (IDEAL_MIN_CHARS..=IDEAL_MAX_CHARS).contains(&chars) {
            score += IDEAL_LENGTH_BONUS;
        } else if chars > TOO_LONG_CHARS {
            score -= TOO_LONG_PENALTY;
        }

        score.clamp(0.0, 10.0)
    }
}
