//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::ContentReport;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single content report as JSON
    pub fn report(&self, report: &ContentReport) -> String {
        self.to_json(report, "{}")
    }

    /// Report multiple reports as a JSON array
    pub fn report_many(&self, reports: &[ContentReport]) -> String {
        self.to_json(&reports, "[]")
    }

    /// Report with summary
    pub fn report_with_summary(&self, reports: &[ContentReport], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results: reports,
            summary: stats,
        };
        self.to_json(&output, "{}")
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: &'a [ContentReport],
    summary: &'a AggregateStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ContentAnalyzer;
    use crate::config::EffectiveConfig;
    use crate::ContentType;

    fn make_report(source: &str, text: &str, config: &EffectiveConfig) -> ContentReport {
        ContentAnalyzer::new().analyze_text(source, text, config)
    }

    #[test]
    fn test_json_single_report_has_expected_keys() {
        let config = EffectiveConfig::new(ContentType::Blog).with_keywords(vec!["rust".into()]);
        let report = make_report("post.md", "# Rust\n\nRust is fun.", &config);

        let json = JsonReporter::new().report(&report);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["source"], "post.md");
        assert_eq!(parsed["score"]["content_type"], "blog");
        assert!(parsed["score"]["overall_score"].is_number());
        assert!(parsed["score"]["grade"].is_string());
        assert!(parsed["seo"]["seo_score"].is_number());
        assert!(parsed["seo"]["keyword_analysis"]["rust"].is_object());
        assert!(parsed["length_warnings"].is_array());
    }

    #[test]
    fn test_json_omits_absent_sections() {
        let report = make_report("note.txt", "Hi.", &EffectiveConfig::default());
        let json = JsonReporter::new().report(&report);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("seo").is_none());
        assert!(parsed.get("length_warnings").is_none());
    }

    #[test]
    fn test_json_pretty_output() {
        let report = make_report("note.txt", "Hi.", &EffectiveConfig::default());
        let json = JsonReporter::new().pretty().report(&report);
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }

    #[test]
    fn test_json_report_many() {
        let config = EffectiveConfig::default();
        let reports = vec![make_report("a.md", "A.", &config), make_report("b.md", "B.", &config)];

        let json = JsonReporter::new().report_many(&reports);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["source"], "a.md");
        assert_eq!(arr[1]["source"], "b.md");
    }

    #[test]
    fn test_json_report_with_summary() {
        let config = EffectiveConfig::default();
        let reports = vec![make_report("a.md", "", &config), make_report("b.md", "", &config)];
        let stats = ContentAnalyzer::aggregate_stats(&reports);

        let json = JsonReporter::new().report_with_summary(&reports, &stats);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["results"].as_array().unwrap().len(), 2);
        let summary = &parsed["summary"];
        assert_eq!(summary["files_analyzed"], 2);
        assert_eq!(summary["average_score"], 6.7);
        assert_eq!(summary["average_grade"], "B-");
        assert!(summary.get("average_seo_score").is_none());
    }

    #[test]
    fn test_json_report_many_empty() {
        let json = JsonReporter::new().report_many(&[]);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.as_array().unwrap().is_empty());
    }
}
