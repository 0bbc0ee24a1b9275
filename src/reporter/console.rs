//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::scoring::ScoreCalculator;
use crate::{ContentReport, Grade, KeywordStatus, SeoReport};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single content report
    pub fn report(&self, report: &ContentReport) {
        self.print_header(report);
        self.print_score(report);
        self.print_breakdown(report);
        self.print_feedback(report);

        if let Some(ref seo) = report.seo {
            self.print_seo(seo);
        }

        if !report.length_warnings.is_empty() {
            self.print_length_warnings(&report.length_warnings);
        }
        println!();
    }

    /// Report multiple results with summary
    pub fn report_many(&self, reports: &[ContentReport], stats: &AggregateStats) {
        for report in reports {
            self.report(report);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (one line per file)
    pub fn report_quiet(&self, report: &ContentReport) {
        println!("{}", self.quiet_line(report));
    }

    fn quiet_line(&self, report: &ContentReport) -> String {
        let grade = report.score.grade();
        let mut line = format!(
            "{}: {:.1} ({})",
            report.source,
            report.score.overall_score(),
            self.colorize_grade(grade)
        );
        if let Some(ref seo) = report.seo {
            line.push_str(&format!(" seo {}", seo.seo_score));
        }
        line
    }

    fn print_header(&self, report: &ContentReport) {
        println!();
        println!(
            "{}",
            format!("📝 Content Quality Analysis: {}", report.source).bold()
        );
        let mut details = format!("   Type: {}", report.score.content_type);
        if self.verbose {
            if let Some(count) = report.score.character_count {
                details.push_str(&format!(" | Characters: {}", count));
            }
        }
        println!("{}", details);
        println!();
    }

    fn print_score(&self, report: &ContentReport) {
        let overall = report.score.overall_score();
        let grade = report.score.grade();
        let score_bar = self.create_score_bar(overall);

        println!(
            "   Score: {} {}",
            score_bar,
            self.colorize_grade(grade).bold()
        );
        println!(
            "   {}",
            ScoreCalculator::grade_description(grade).dimmed()
        );
        println!();
    }

    fn print_breakdown(&self, report: &ContentReport) {
        println!("   {}", "Score Breakdown:".bold());
        for (dimension, score) in report.score.dimension_scores.iter() {
            let bar = self.create_mini_bar(score);
            let score_str = format!("{:>4.1}/10", score);
            let colored_score = if score >= 8.0 {
                score_str.green()
            } else if score >= 6.0 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!("   {} {} {}", bar, colored_score, dimension.label());
        }
        println!();
    }

    fn print_feedback(&self, report: &ContentReport) {
        println!("   {}", "Strengths:".bold());
        for strength in report.score.strengths() {
            println!("   {} {}", "✓".green(), strength);
        }
        println!("   {}", "Improvements:".bold());
        for improvement in report.score.improvements() {
            println!("   {} {}", "→".cyan(), improvement);
        }
        println!();
    }

    fn print_seo(&self, seo: &SeoReport) {
        let seo_score = format!("{}/100", seo.seo_score);
        let colored_score = if seo.seo_score >= 80 {
            seo_score.green()
        } else if seo.seo_score >= 60 {
            seo_score.yellow()
        } else {
            seo_score.red()
        };
        println!(
            "   {} {} ({} words)",
            "SEO Score:".bold(),
            colored_score.bold(),
            seo.word_count
        );

        if !seo.keyword_analysis.is_empty() {
            println!("   {}", "Keywords:".bold());
            for stat in seo.keyword_analysis.iter() {
                let status = stat.status.to_string();
                let status = match stat.status {
                    KeywordStatus::Optimal => status.green(),
                    KeywordStatus::TooLow | KeywordStatus::TooHigh => status.yellow(),
                    KeywordStatus::Missing => status.red(),
                };
                let placement = format!(
                    "first paragraph: {} | heading: {}",
                    yes_no(stat.in_first_paragraph),
                    yes_no(stat.in_headings)
                );
                println!(
                    "   {:<20} {:>3}x {:>6.2}% {} {}",
                    stat.keyword,
                    stat.count,
                    stat.density,
                    status,
                    placement.dimmed()
                );
            }
        }

        let structure = &seo.structure;
        println!(
            "   Structure: H1 {} | H2 {} | H3 {} | lists {} | links {}",
            structure.h1_count,
            structure.h2_count,
            structure.h3_count,
            yes_no(structure.has_lists),
            structure.link_count
        );

        let readability = &seo.readability;
        if self.verbose {
            println!(
                "   Readability: {} ({} sentences, {:.1} words/sentence, {} paragraphs)",
                readability.readability_level,
                readability.sentence_count,
                readability.avg_sentence_length,
                readability.paragraph_count
            );
        } else {
            println!("   Readability: {}", readability.readability_level);
        }

        if !seo.recommendations.is_empty() {
            println!("   {}", "Recommendations:".bold());
            let shown = if self.verbose {
                seo.recommendations.len()
            } else {
                5
            };
            for rec in seo.recommendations.iter().take(shown) {
                println!("   {} {}", "→".cyan(), rec);
            }
            let hidden = seo.recommendations.len().saturating_sub(shown);
            if hidden > 0 {
                println!(
                    "   {} {} more (use --verbose to show)",
                    "ℹ".blue(),
                    hidden
                );
            }
        }
        println!();
    }

    fn print_length_warnings(&self, warnings: &[String]) {
        for warning in warnings {
            println!("   {} {}", "⚠".yellow(), warning);
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Files analyzed:  {}",
            stats.files_analyzed.to_string().bold()
        );
        println!(
            "   Average score:   {} ({})",
            format!("{:.1}", stats.average_score).bold(),
            self.colorize_grade(stats.average_grade)
        );
        if let Some(seo) = stats.average_seo_score {
            println!("   Average SEO:     {:.1}", seo);
        }
        println!("   Recommendations: {}", stats.total_recommendations);
        println!();
    }

    fn colorize_grade(&self, grade: Grade) -> colored::ColoredString {
        let s = grade.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match grade {
            Grade::APlus | Grade::A => s.green().bold(),
            Grade::AMinus | Grade::BPlus | Grade::B => s.green(),
            Grade::BMinus | Grade::CPlus => s.yellow(),
            Grade::C => s.red(),
            Grade::CMinus => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: f64) -> String {
        let filled = ((score.clamp(0.0, 10.0) * 2.0) as usize).min(20);
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>4.1}", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score >= 8.0 {
                bar.green().to_string()
            } else if score >= 6.0 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: f64) -> String {
        let filled = (score.clamp(0.0, 10.0) as usize).min(10);
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
