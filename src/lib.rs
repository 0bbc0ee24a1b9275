//! ContentBlitz: content quality scoring and SEO analysis
//!
//! This library scores finished marketing content (blog articles, short-form
//! social posts, general copy) against fixed heuristic tables and analyzes it
//! for keyword usage, readability and heading structure.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod mcp;
pub mod reporter;
pub mod suggestions;
pub mod watcher;

pub use error::Error;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// Kind of content being scored. Selects the dimension set.
/// Deserialization goes through `FromStr`, so config files accept the same
/// spellings as the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ContentType {
    /// Long-form article
    Blog,
    /// Social post (LinkedIn and similar)
    ShortForm,
    /// Anything else
    #[default]
    General,
}

impl ContentType {
    /// Machine name, as used in config files and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::ShortForm => "short_form",
            ContentType::General => "general",
        }
    }

    /// Dimensions scored for this content type, in report order
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            ContentType::Blog => &[
                Dimension::Engagement,
                Dimension::Structure,
                Dimension::Clarity,
                Dimension::Actionability,
                Dimension::Professionalism,
            ],
            ContentType::ShortForm => &[
                Dimension::HookStrength,
                Dimension::EngagementPotential,
                Dimension::Professionalism,
                Dimension::CallToAction,
                Dimension::Formatting,
            ],
            ContentType::General => &[
                Dimension::Clarity,
                Dimension::Engagement,
                Dimension::Professionalism,
            ],
        }
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" => Ok(ContentType::Blog),
            "short_form" | "short-form" | "shortform" | "linkedin" => Ok(ContentType::ShortForm),
            "general" => Ok(ContentType::General),
            _ => Err(Error::UnknownContentType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ContentType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Blog => write!(f, "Blog"),
            ContentType::ShortForm => write!(f, "Short-form"),
            ContentType::General => write!(f, "General"),
        }
    }
}

/// A named heuristic sub-score (0-10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Engagement,
    Structure,
    Clarity,
    Actionability,
    Professionalism,
    HookStrength,
    EngagementPotential,
    CallToAction,
    Formatting,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Engagement => "engagement",
            Dimension::Structure => "structure",
            Dimension::Clarity => "clarity",
            Dimension::Actionability => "actionability",
            Dimension::Professionalism => "professionalism",
            Dimension::HookStrength => "hook_strength",
            Dimension::EngagementPotential => "engagement_potential",
            Dimension::CallToAction => "call_to_action",
            Dimension::Formatting => "formatting",
        }
    }

    /// Title-cased display label ("Call To Action")
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Letter grade for an overall content score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
}

impl Grade {
    /// Map an overall score (0-10) to a grade. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Grade::APlus
        } else if score >= 8.5 {
            Grade::A
        } else if score >= 8.0 {
            Grade::AMinus
        } else if score >= 7.5 {
            Grade::BPlus
        } else if score >= 7.0 {
            Grade::B
        } else if score >= 6.5 {
            Grade::BMinus
        } else if score >= 6.0 {
            Grade::CPlus
        } else if score >= 5.5 {
            Grade::C
        } else {
            Grade::CMinus
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
        };
        write!(f, "{}", s)
    }
}

/// Ordered dimension scores. Each value is clamped to 0-10 on insert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DimensionScores(Vec<(Dimension, f64)>);

impl DimensionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a dimension score, replacing an earlier value for the same dimension
    pub fn insert(&mut self, dimension: Dimension, score: f64) {
        let score = score.clamp(0.0, 10.0);
        match self.0.iter_mut().find(|(d, _)| *d == dimension) {
            Some(entry) => entry.1 = score,
            None => self.0.push((dimension, score)),
        }
    }

    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.0
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.0.iter().map(|(d, _)| *d)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unrounded arithmetic mean (0 when empty)
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.iter().map(|(_, score)| score).sum::<f64>() / self.0.len() as f64
    }
}

impl FromIterator<(Dimension, f64)> for DimensionScores {
    fn from_iter<I: IntoIterator<Item = (Dimension, f64)>>(iter: I) -> Self {
        let mut scores = DimensionScores::new();
        for (dimension, score) in iter {
            scores.insert(dimension, score);
        }
        scores
    }
}

impl Serialize for DimensionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (dimension, score) in &self.0 {
            map.serialize_entry(dimension.as_str(), score)?;
        }
        map.end()
    }
}

/// Content Scorer output.
///
/// Only the dimension scores are stored; overall score, grade, strengths and
/// improvements are derived from them on every call.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// Content type the dimension set was chosen for
    pub content_type: ContentType,
    /// Per-dimension scores (0-10)
    pub dimension_scores: DimensionScores,
    /// Character count, reported for short-form content only
    pub character_count: Option<usize>,
    /// RFC 3339 creation time
    pub timestamp: String,
}

impl ScoreReport {
    /// Mean of the dimension scores, rounded to one decimal
    pub fn overall_score(&self) -> f64 {
        analyzer::ScoreCalculator::overall(&self.dimension_scores)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.overall_score())
    }

    pub fn strengths(&self) -> Vec<String> {
        analyzer::ScoreCalculator::strengths(&self.dimension_scores)
    }

    pub fn improvements(&self) -> Vec<String> {
        analyzer::ScoreCalculator::improvements(&self.dimension_scores)
    }
}

impl Serialize for ScoreReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.character_count.is_some() { 8 } else { 7 };
        let mut state = serializer.serialize_struct("ScoreReport", len)?;
        state.serialize_field("content_type", &self.content_type)?;
        state.serialize_field("overall_score", &self.overall_score())?;
        state.serialize_field("dimension_scores", &self.dimension_scores)?;
        state.serialize_field("grade", &self.grade())?;
        state.serialize_field("strengths", &self.strengths())?;
        state.serialize_field("improvements", &self.improvements())?;
        if let Some(count) = self.character_count {
            state.serialize_field("character_count", &count)?;
        }
        state.serialize_field("timestamp", &self.timestamp)?;
        state.end()
    }
}

/// Keyword usage judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordStatus {
    Missing,
    TooLow,
    TooHigh,
    Optimal,
}

impl std::fmt::Display for KeywordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordStatus::Missing => write!(f, "missing"),
            KeywordStatus::TooLow => write!(f, "too low"),
            KeywordStatus::TooHigh => write!(f, "too high"),
            KeywordStatus::Optimal => write!(f, "optimal"),
        }
    }
}

/// Usage statistics for one target keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordStat {
    /// The keyword as given by the caller
    #[serde(skip)]
    pub keyword: String,
    /// Case-insensitive substring occurrences
    pub count: usize,
    /// Occurrences per 100 words, two decimals
    pub density: f64,
    pub in_first_paragraph: bool,
    pub in_headings: bool,
    pub status: KeywordStatus,
}

/// Keyword statistics in caller order, serialized as a keyword -> stat map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeywordAnalysis(Vec<KeywordStat>);

impl KeywordAnalysis {
    /// Add a keyword entry. An exact duplicate keyword keeps its first entry.
    pub fn push(&mut self, stat: KeywordStat) {
        if self.get(&stat.keyword).is_none() {
            self.0.push(stat);
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordStat> {
        self.0.iter().find(|s| s.keyword == keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordStat> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for KeywordAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for stat in &self.0 {
            map.serialize_entry(&stat.keyword, stat)?;
        }
        map.end()
    }
}

/// Readability band from average sentence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilityLevel {
    Easy,
    Moderate,
    Difficult,
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadabilityLevel::Easy => write!(f, "easy"),
            ReadabilityLevel::Moderate => write!(f, "moderate"),
            ReadabilityLevel::Difficult => write!(f, "difficult"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    pub sentence_count: usize,
    /// Words per sentence, one decimal
    pub avg_sentence_length: f64,
    pub readability_level: ReadabilityLevel,
    pub paragraph_count: usize,
}

/// Markdown heading and link structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureStats {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub has_lists: bool,
    pub link_count: usize,
    /// Exactly one H1 and at least two H2 headings
    pub has_proper_hierarchy: bool,
}

/// SEO Optimizer output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoReport {
    pub word_count: usize,
    pub keyword_analysis: KeywordAnalysis,
    pub readability: Readability,
    pub structure: StructureStats,
    pub recommendations: Vec<String>,
    /// 0-100
    pub seo_score: u8,
}

/// Result of analyzing one piece of content with its effective config
#[derive(Debug, Clone, Serialize)]
pub struct ContentReport {
    /// File path, or "<stdin>"
    pub source: String,
    pub score: ScoreReport,
    /// Present when target keywords were configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoReport>,
    /// Length limit violations for the content type
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub length_warnings: Vec<String>,
}

/// Public API: analyze a single content file. Used by the MCP server and other
/// programmatic consumers.
///
/// * `path` - path to the content file
/// * `work_dir` - directory to start the config search from
/// * `config_path` - optional path to .contentblitzrc.json; if None, searches from work_dir
pub fn analyze_file(
    path: &std::path::Path,
    work_dir: &std::path::Path,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<ContentReport> {
    let config = crate::config::load_config(work_dir, config_path)?;
    let analyzer = crate::analyzer::ContentAnalyzer::new();
    analyzer.analyze_file(path, Some(&config))
}
