//! Config schema and deserialization

use crate::suggestions::BrandVoice;
use crate::ContentType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Product defaults for content length
pub const DEFAULT_BLOG_MIN_WORDS: usize = 800;
pub const DEFAULT_BLOG_MAX_WORDS: usize = 2000;
pub const DEFAULT_SHORT_FORM_MAX_CHARS: usize = 3000;

/// Length limits per content type. Unset values fall back to the product defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_min_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_max_words: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_form_max_chars: Option<usize>,
}

impl LengthLimits {
    pub fn blog_min_words(&self) -> usize {
        self.blog_min_words.unwrap_or(DEFAULT_BLOG_MIN_WORDS)
    }

    pub fn blog_max_words(&self) -> usize {
        self.blog_max_words.unwrap_or(DEFAULT_BLOG_MAX_WORDS)
    }

    pub fn short_form_max_chars(&self) -> usize {
        self.short_form_max_chars
            .unwrap_or(DEFAULT_SHORT_FORM_MAX_CHARS)
    }

    /// Fill unset values from `base`
    fn merge_from(&mut self, base: LengthLimits) {
        self.blog_min_words = self.blog_min_words.or(base.blog_min_words);
        self.blog_max_words = self.blog_max_words.or(base.blog_max_words);
        self.short_form_max_chars = self.short_form_max_chars.or(base.short_form_max_chars);
    }
}

/// Per-path override configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Content type for matched files
    #[serde(default)]
    pub content_type: Option<ContentType>,

    /// Target keywords for matched files (replaces the base list)
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    #[serde(default)]
    pub min_score: Option<f64>,

    #[serde(default)]
    pub min_seo_score: Option<u8>,
}

/// Root config structure for .contentblitzrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Content type for every analyzed file (default: general)
    #[serde(default)]
    pub content_type: Option<ContentType>,

    /// Target SEO keywords. SEO analysis runs only when this is non-empty.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Minimum overall score, 0-10 (exit 1 if below)
    #[serde(default)]
    pub min_score: Option<f64>,

    /// Minimum SEO score, 0-100 (exit 1 if below)
    #[serde(default)]
    pub min_seo_score: Option<u8>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File name suffixes treated as content (default: .md, .markdown, .txt)
    #[serde(default)]
    pub content_patterns: Vec<String>,

    /// Brand guidelines (category -> guideline) for revision prompts
    #[serde(default)]
    pub brand_voice: BrandVoice,

    #[serde(default)]
    pub limits: LengthLimits,

    /// Per-path configuration overrides, applied in order
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence over the
    /// file, including its per-path overrides.
    pub fn merge_with_cli(
        mut self,
        cli_content_type: Option<ContentType>,
        cli_keywords: Vec<String>,
        cli_min_score: Option<f64>,
        cli_min_seo_score: Option<u8>,
    ) -> Self {
        if cli_content_type.is_some() {
            self.content_type = cli_content_type;
            for o in &mut self.overrides {
                o.content_type = None;
            }
        }
        if !cli_keywords.is_empty() {
            self.keywords = cli_keywords;
            for o in &mut self.overrides {
                o.keywords = None;
            }
        }
        if cli_min_score.is_some() {
            self.min_score = cli_min_score;
            for o in &mut self.overrides {
                o.min_score = None;
            }
        }
        if cli_min_seo_score.is_some() {
            self.min_seo_score = cli_min_seo_score;
            for o in &mut self.overrides {
                o.min_seo_score = None;
            }
        }
        self
    }

    /// Get effective config for a specific file path, applying overrides
    pub fn effective_for_file(&self, file_path: &Path) -> EffectiveConfig {
        let mut effective = EffectiveConfig {
            content_type: self.content_type.unwrap_or_default(),
            keywords: self.keywords.clone(),
            min_score: self.min_score,
            min_seo_score: self.min_seo_score,
            limits: self.limits,
        };

        for override_cfg in &self.overrides {
            if Self::matches_override(file_path, &override_cfg.files) {
                if let Some(content_type) = override_cfg.content_type {
                    effective.content_type = content_type;
                }
                if let Some(keywords) = &override_cfg.keywords {
                    effective.keywords = keywords.clone();
                }
                if let Some(min_score) = override_cfg.min_score {
                    effective.min_score = Some(min_score);
                }
                if let Some(min_seo_score) = override_cfg.min_seo_score {
                    effective.min_seo_score = Some(min_seo_score);
                }
            }
        }

        effective
    }

    /// Check if a file path matches any of the override patterns
    fn matches_override(file_path: &Path, patterns: &[String]) -> bool {
        let path_str = file_path.to_string_lossy();
        for pattern in patterns {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(file_path)
                    || path_str.contains(pattern.trim_start_matches("**/"))
                {
                    return true;
                }
            }
        }
        false
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.content_type.is_none() {
            self.content_type = base.content_type;
        }
        if self.keywords.is_empty() {
            self.keywords = base.keywords;
        }
        if self.min_score.is_none() {
            self.min_score = base.min_score;
        }
        if self.min_seo_score.is_none() {
            self.min_seo_score = base.min_seo_score;
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.content_patterns.is_empty() {
            self.content_patterns = base.content_patterns;
        }

        self.limits.merge_from(base.limits);
        self.brand_voice.merge_from(base.brand_voice);

        // Prepend base overrides
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }

    /// Get content file suffixes
    pub fn get_content_patterns(&self) -> Vec<&str> {
        if self.content_patterns.is_empty() {
            vec![".md", ".markdown", ".txt"]
        } else {
            self.content_patterns.iter().map(|s| s.as_str()).collect()
        }
    }

    /// True if the file name ends with one of the content suffixes
    pub fn is_content_file(&self, path: &Path) -> bool {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        self.get_content_patterns()
            .iter()
            .any(|suffix| name.ends_with(suffix))
    }
}

/// Effective configuration for a specific file (after applying overrides)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveConfig {
    pub content_type: ContentType,
    pub keywords: Vec<String>,
    pub min_score: Option<f64>,
    pub min_seo_score: Option<u8>,
    pub limits: LengthLimits,
}

impl EffectiveConfig {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}
