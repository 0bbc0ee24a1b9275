//! Word tables and compiled patterns shared by the scoring rules and the SEO optimizer.
//!
//! All entries are lowercase; rules match them against lowercased text.

use regex::Regex;
use std::sync::LazyLock;

pub const STORY_WORDS: &[&str] = &["story", "experience", "learned", "discovered", "realized"];

pub const EXAMPLE_CUES: &[&str] = &["example", "for instance"];

pub const EMOTION_WORDS: &[&str] = &[
    "amazing",
    "incredible",
    "excited",
    "surprised",
    "frustrated",
    "happy",
];

pub const INTRO_CUES: &[&str] = &["introduction", "in this", "today"];

pub const CONCLUSION_CUES: &[&str] = &["conclusion", "in summary", "to wrap up"];

pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "additionally",
    "consequently",
];

pub const ACTION_WORDS: &[&str] = &[
    "learn",
    "discover",
    "implement",
    "apply",
    "use",
    "try",
    "start",
    "begin",
];

pub const PRACTICAL_CUES: &[&str] = &["example", "here's how"];

/// Calls to action in long-form content
pub const ARTICLE_CTA_WORDS: &[&str] = &[
    "try",
    "start",
    "download",
    "sign up",
    "learn more",
    "get started",
];

pub const BOLD_CLAIM_WORDS: &[&str] = &["never", "always", "secret", "truth"];

pub const PERSONAL_PRONOUNS: &[&str] = &["you", "your", "we", "our"];

pub const ENGAGEMENT_PROMPTS: &[&str] = &["what do you think", "share your", "comment below"];

/// Calls to action in short-form posts
pub const POST_CTA_PHRASES: &[&str] = &[
    "comment",
    "share",
    "follow",
    "connect",
    "reach out",
    "let me know",
    "what do you think",
    "join",
    "learn more",
];

/// Word tokens (Unicode word characters)
pub static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("Invalid word regex"));

/// Sentence terminator runs
pub static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence regex"));

pub static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%|\d+ percent").expect("Invalid percentage regex"));

pub static PERCENT_SIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%").expect("Invalid percent regex"));

pub static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.").expect("Invalid numbered item regex"));

pub static SHOUTED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{4,}\b").expect("Invalid caps regex"));

pub static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+").expect("Invalid h1 regex"));

pub static H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s+").expect("Invalid h2 regex"));

pub static H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^###\s+").expect("Invalid h3 regex"));

/// Any markdown heading; group 1 is the heading text
pub static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+(.+)$").expect("Invalid heading regex"));

pub static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*+]\s+").expect("Invalid list regex"));

pub static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.+?\]\(.+?\)").expect("Invalid link regex"));

/// Emoticons and pictographs; each run counts once
pub static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}]+").expect("Invalid emoji regex")
});
