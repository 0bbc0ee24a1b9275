//! Revision prompt generation for a language model

use super::BrandVoice;
use crate::analyzer::scoring::ScoreCalculator;
use crate::analyzer::text::head_chars;
use crate::{ContentReport, ContentType, KeywordStatus, SeoReport};

/// Content beyond this many chars is cut from the prompt
pub const MAX_PROMPT_TEXT_CHARS: usize = 3000;

/// Builds a markdown prompt asking a language model to revise scored content
pub struct RevisionPromptBuilder {
    max_text_chars: usize,
    brand_voice: BrandVoice,
}

impl RevisionPromptBuilder {
    pub fn new() -> Self {
        Self {
            max_text_chars: MAX_PROMPT_TEXT_CHARS,
            brand_voice: BrandVoice::default(),
        }
    }

    /// Brand guidelines to follow. Without them the prompt still carries the default tone.
    pub fn brand_voice(mut self, voice: BrandVoice) -> Self {
        self.brand_voice = voice;
        self
    }

    /// Override the text truncation limit
    pub fn max_text_chars(mut self, max: usize) -> Self {
        self.max_text_chars = max;
        self
    }

    /// Generate the revision prompt for `text` and its report
    pub fn build(&self, report: &ContentReport, text: &str) -> String {
        let score = &report.score;
        let grade = score.grade();

        let mut prompt = String::new();
        prompt.push_str(role_line(score.content_type));
        prompt.push_str(&format!(
            " Revise the following {} content so it scores 8.0 or higher.\n\n",
            score.content_type.as_str().replace('_', "-")
        ));

        prompt.push_str("## Analysis Summary\n");
        prompt.push_str(&format!("**Source:** `{}`\n", report.source));
        prompt.push_str(&format!(
            "**Current Score:** {:.1}/10 (Grade: {}, {})\n\n",
            score.overall_score(),
            grade,
            ScoreCalculator::grade_description(grade)
        ));

        prompt.push_str("| Dimension | Score |\n|---|---|\n");
        for (dimension, value) in score.dimension_scores.iter() {
            prompt.push_str(&format!("| {} | {:.1} |\n", dimension.label(), value));
        }
        prompt.push('\n');

        prompt.push_str("## Improvements Needed\n");
        for improvement in score.improvements() {
            prompt.push_str(&format!("- {}\n", improvement));
        }
        prompt.push('\n');

        if let Some(ref seo) = report.seo {
            prompt.push_str(&format_seo(seo));
        }

        if !report.length_warnings.is_empty() {
            prompt.push_str("## Length\n");
            for warning in &report.length_warnings {
                prompt.push_str(&format!("- {}\n", warning));
            }
            prompt.push('\n');
        }

        prompt.push_str(&self.brand_voice.prompt_section());

        let excerpt = head_chars(text, self.max_text_chars);
        prompt.push_str("## Current Content\n```markdown\n");
        prompt.push_str(excerpt);
        if excerpt.len() < text.len() {
            prompt.push_str("\n[... truncated]");
        }
        prompt.push_str("\n```\n\n");

        prompt.push_str("### Output Format\n");
        prompt.push_str(
            "Provide ONLY the revised content in markdown. Keep the original facts and voice; \
             do not add commentary before or after it.\n",
        );

        prompt
    }
}

impl Default for RevisionPromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn role_line(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Blog => "You are an SEO expert and senior content editor.",
        ContentType::ShortForm => "You are a LinkedIn engagement expert.",
        ContentType::General => "You are an experienced editor.",
    }
}

fn format_seo(seo: &SeoReport) -> String {
    let mut out = format!("## SEO\n**SEO Score:** {}/100\n", seo.seo_score);

    let keywords: Vec<String> = seo
        .keyword_analysis
        .iter()
        .map(|stat| match stat.status {
            KeywordStatus::Optimal => format!("{} (optimal)", stat.keyword),
            status => format!("{} ({}, {:.2}%)", stat.keyword, status, stat.density),
        })
        .collect();
    if !keywords.is_empty() {
        out.push_str(&format!("**Target Keywords:** {}\n", keywords.join(", ")));
    }

    for rec in &seo.recommendations {
        out.push_str(&format!("- {}\n", rec));
    }
    out.push('\n');
    out
}
