//! Analysis engine - runs the scorer and SEO optimizer with a file's effective config

use crate::config::{Config, EffectiveConfig};
use crate::{ContentReport, ContentType, Grade};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

use super::text::{round_to, word_count};
use super::{ContentScorer, SeoOptimizer};

/// Path that reads content from standard input
pub const STDIN_PATH: &str = "-";
const STDIN_LABEL: &str = "<stdin>";

/// Main analysis engine that wraps both heuristic engines
pub struct ContentAnalyzer {
    scorer: ContentScorer,
    seo: SeoOptimizer,
}

impl ContentAnalyzer {
    pub fn new() -> Self {
        Self {
            scorer: ContentScorer::new(),
            seo: SeoOptimizer::new(),
        }
    }

    /// Analyze in-memory text with an already resolved config.
    /// SEO analysis only runs when target keywords are configured.
    pub fn analyze_text(&self, label: &str, text: &str, config: &EffectiveConfig) -> ContentReport {
        let score = self.scorer.score(text, config.content_type);
        let seo = if config.keywords.is_empty() {
            None
        } else {
            Some(self.seo.analyze(text, &config.keywords))
        };

        ContentReport {
            source: label.to_string(),
            score,
            seo,
            length_warnings: length_warnings(text, config),
        }
    }

    /// Read and analyze a content file. `-` reads standard input.
    pub fn analyze_file(&self, path: &Path, config: Option<&Config>) -> Result<ContentReport> {
        self.analyze_file_with_text(path, config)
            .map(|(report, _)| report)
    }

    /// Like `analyze_file`, also returning the text that was read
    pub fn analyze_file_with_text(
        &self,
        path: &Path,
        config: Option<&Config>,
    ) -> Result<(ContentReport, String)> {
        let (label, text) = read_content(path)?;
        let effective = match config {
            Some(config) => config.effective_for_file(path),
            None => EffectiveConfig::default(),
        };

        let report = self.analyze_text(&label, &text, &effective);
        Ok((report, text))
    }

    /// Analyze several files in order; one failure does not stop the rest
    pub fn analyze_many(
        &self,
        paths: &[&Path],
        config: Option<&Config>,
    ) -> Vec<Result<ContentReport>> {
        paths
            .iter()
            .map(|path| self.analyze_file(path, config))
            .collect()
    }

    /// Calculate aggregate statistics from multiple reports
    pub fn aggregate_stats(reports: &[ContentReport]) -> AggregateStats {
        if reports.is_empty() {
            return AggregateStats::default();
        }

        let total_score: f64 = reports.iter().map(|r| r.score.overall_score()).sum();
        let average_score = round_to(total_score / reports.len() as f64, 1);

        let seo_scores: Vec<f64> = reports
            .iter()
            .filter_map(|r| r.seo.as_ref())
            .map(|seo| seo.seo_score as f64)
            .collect();
        let average_seo_score = if seo_scores.is_empty() {
            None
        } else {
            Some(round_to(
                seo_scores.iter().sum::<f64>() / seo_scores.len() as f64,
                1,
            ))
        };

        let total_recommendations = reports
            .iter()
            .filter_map(|r| r.seo.as_ref())
            .map(|seo| seo.recommendations.len())
            .sum();

        AggregateStats {
            files_analyzed: reports.len(),
            average_score,
            average_grade: Grade::from_score(average_score),
            average_seo_score,
            total_recommendations,
        }
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read content and its display label. `-` reads standard input.
pub fn read_content(path: &Path) -> Result<(String, String)> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read content from stdin")?;
        return Ok((STDIN_LABEL.to_string(), text));
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    Ok((path.display().to_string(), text))
}

/// Messages for content outside the configured length limits
fn length_warnings(text: &str, config: &EffectiveConfig) -> Vec<String> {
    let limits = &config.limits;
    let mut warnings = Vec::new();

    match config.content_type {
        ContentType::Blog => {
            let words = word_count(text);
            if words < limits.blog_min_words() {
                warnings.push(format!(
                    "Blog post has {} words; aim for at least {}.",
                    words,
                    limits.blog_min_words()
                ));
            } else if words > limits.blog_max_words() {
                warnings.push(format!(
                    "Blog post has {} words; keep it under {}.",
                    words,
                    limits.blog_max_words()
                ));
            }
        }
        ContentType::ShortForm => {
            let chars = text.chars().count();
            if chars > limits.short_form_max_chars() {
                warnings.push(format!(
                    "Post has {} characters; the limit is {}.",
                    chars,
                    limits.short_form_max_chars()
                ));
            }
        }
        ContentType::General => {}
    }

    warnings
}

/// Aggregate statistics from multiple file analyses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Number of files analyzed
    pub files_analyzed: usize,
    /// Mean overall score (0-10, one decimal)
    pub average_score: f64,
    pub average_grade: Grade,
    /// Mean SEO score over the reports that have one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_seo_score: Option<f64>,
    /// Total SEO recommendations across all files
    pub total_recommendations: usize,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            files_analyzed: 0,
            average_score: 0.0,
            average_grade: Grade::CMinus,
            average_seo_score: None,
            total_recommendations: 0,
        }
    }
}
