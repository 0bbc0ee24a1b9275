//! Analyzer module - content scoring and SEO analysis engines

pub mod engine;
pub mod patterns;
pub mod rules;
pub mod scorer;
pub mod scoring;
pub mod seo;
pub mod text;

pub use engine::{AggregateStats, ContentAnalyzer};
pub use scorer::ContentScorer;
pub use scoring::ScoreCalculator;
pub use seo::SeoOptimizer;
