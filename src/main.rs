//! ContentBlitz: Content Quality and SEO Analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use contentblitz::analyzer::engine::STDIN_PATH;
use contentblitz::analyzer::ContentAnalyzer;
use contentblitz::config::{
    build_ignore_set, is_ignored, load_config, starter_config, Config, CONFIG_FILENAME,
};
use contentblitz::reporter::{ConsoleReporter, JsonReporter};
use contentblitz::suggestions::RevisionPromptBuilder;
use contentblitz::watcher::ContentWatcher;
use contentblitz::{ContentReport, ContentType};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// ContentBlitz: quality scoring and SEO analysis for marketing content
#[derive(Parser, Debug)]
#[command(name = "contentblitz")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content file or directory to analyze, or - for stdin (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Content type: blog, short_form (alias linkedin) or general
    #[arg(long = "type", value_name = "TYPE")]
    content_type: Option<ContentType>,

    /// Target SEO keyword (repeatable; comma-separated values are split)
    #[arg(long = "keyword", short = 'k', value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (one line per file)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Minimum overall score, 0-10 (exit 1 if below)
    #[arg(long, value_name = "SCORE")]
    min_score: Option<f64>,

    /// Minimum SEO score, 0-100 (exit 1 if below)
    #[arg(long, value_name = "SCORE")]
    min_seo_score: Option<u8>,

    /// Path to config file (default: search .contentblitzrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Watch for file changes and re-analyze
    #[arg(long)]
    watch: bool,

    /// Print a revision prompt for a language model (single file only)
    #[arg(long)]
    prompt: bool,

    /// With --prompt: write the prompt to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    prompt_output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run MCP server (stdio JSON-RPC)
    Mcp,

    /// Create .contentblitzrc.json with sensible defaults
    Init {
        /// Default content type: blog, short_form or general
        #[arg(long = "type", value_name = "TYPE")]
        content_type: Option<ContentType>,

        /// Target SEO keyword (repeatable; comma-separated values are split)
        #[arg(long = "keyword", short = 'k', value_name = "KEYWORD")]
        keywords: Vec<String>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut args = Args::parse();

    if let Some(cmd) = args.command.take() {
        match cmd {
            Commands::Mcp => {
                contentblitz::mcp::run_mcp_server()?;
                return Ok(ExitCode::SUCCESS);
            }
            Commands::Init {
                content_type,
                keywords,
                dir,
            } => {
                return run_init(content_type, split_keywords(&keywords), dir.as_deref());
            }
        }
    }

    let Some(path) = args.path.clone() else {
        anyhow::bail!("A path is required when not using a subcommand");
    };

    if args.watch {
        return run_watch(&args, &path);
    }

    let work_dir = work_dir_for(&path);
    let config = load_cli_config(&args, &work_dir)?;

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let files = collect_content_files(&path, ignore_set.as_ref(), &config)?;
    if files.is_empty() {
        eprintln!("{}: No content files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    let analyzer = ContentAnalyzer::new();
    let mut analyzed: Vec<(PathBuf, ContentReport, String)> = Vec::new();
    let mut had_errors = false;

    for file in &files {
        match analyzer.analyze_file_with_text(file, Some(&config)) {
            Ok((report, text)) => analyzed.push((file.clone(), report, text)),
            Err(e) => {
                if !args.quiet {
                    eprintln!(
                        "{}: Failed to analyze {}: {:#}",
                        "Error".red(),
                        file.display(),
                        e
                    );
                }
                had_errors = true;
            }
        }
    }

    if analyzed.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let reports: Vec<ContentReport> = analyzed.iter().map(|(_, r, _)| r.clone()).collect();
    let stats = ContentAnalyzer::aggregate_stats(&reports);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if reports.len() == 1 {
            println!("{}", reporter.report(&reports[0]));
        } else {
            println!("{}", reporter.report_with_summary(&reports, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for report in &reports {
            reporter.report_quiet(report);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        if reports.len() == 1 {
            reporter.report(&reports[0]);
        } else {
            reporter.report_many(&reports, &stats);
        }
    }

    if args.prompt {
        if let [(_, report, text)] = analyzed.as_slice() {
            let prompt = RevisionPromptBuilder::new()
                .brand_voice(config.brand_voice.clone())
                .build(report, text);
            if let Some(ref output_path) = args.prompt_output {
                std::fs::write(output_path, &prompt).with_context(|| {
                    format!("Failed to write prompt to {}", output_path.display())
                })?;
                if !args.quiet {
                    eprintln!(
                        "{}: Revision prompt written to {}",
                        "Info".blue(),
                        output_path.display()
                    );
                }
            } else {
                println!("\n{}", "═".repeat(60));
                println!("{}", "Revision Prompt:".bold());
                println!("{}", "═".repeat(60));
                println!("{}", prompt);
            }
        } else {
            eprintln!(
                "{}: --prompt only works with a single file",
                "Warning".yellow()
            );
        }
    }

    let mut below_minimum = false;
    for (file, report, _) in &analyzed {
        for failure in minimum_failures(&config, file, report) {
            below_minimum = true;
            if !args.quiet && !args.json {
                eprintln!("{}: {}", "Failed".red().bold(), failure);
            }
        }
    }
    if below_minimum {
        return Ok(ExitCode::from(1));
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Directory to start the config search from
fn work_dir_for(path: &Path) -> PathBuf {
    if path == Path::new(STDIN_PATH) {
        return PathBuf::from(".");
    }
    if path.is_dir() {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Load config and apply CLI flags on top
fn load_cli_config(args: &Args, work_dir: &Path) -> Result<Config> {
    Ok(load_config(work_dir, args.config.as_deref())?.merge_with_cli(
        args.content_type,
        split_keywords(&args.keywords),
        args.min_score,
        args.min_seo_score,
    ))
}

/// Split comma-separated keyword arguments, trimming and dropping empty entries
fn split_keywords(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Messages for each configured minimum the report falls below
fn minimum_failures(config: &Config, file: &Path, report: &ContentReport) -> Vec<String> {
    let effective = config.effective_for_file(file);
    let mut failures = Vec::new();

    if let Some(min) = effective.min_score {
        let score = report.score.overall_score();
        if score < min {
            failures.push(format!(
                "{}: score {:.1} is below minimum {:.1}",
                report.source, score, min
            ));
        }
    }

    if let (Some(min), Some(seo)) = (effective.min_seo_score, report.seo.as_ref()) {
        if seo.seo_score < min {
            failures.push(format!(
                "{}: SEO score {} is below minimum {}",
                report.source, seo.seo_score, min
            ));
        }
    }

    failures
}

fn run_init(
    content_type: Option<ContentType>,
    keywords: Vec<String>,
    dir: Option<&Path>,
) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let content_type = content_type.unwrap_or_default();
    let json = starter_config(content_type, &keywords);

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with contentType={}, keywords={}",
        "Done".green().bold(),
        config_path.display(),
        content_type.as_str(),
        keywords.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_watch(args: &Args, path: &Path) -> Result<ExitCode> {
    if path == Path::new(STDIN_PATH) {
        anyhow::bail!("--watch cannot be used with stdin");
    }

    let work_dir = work_dir_for(path);
    let config = load_cli_config(args, &work_dir)?;
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let patterns = config
        .get_content_patterns()
        .iter()
        .map(|p| p.to_string())
        .collect();
    let watcher = ContentWatcher::watch(path, patterns).context("Failed to create file watcher")?;
    let analyzer = ContentAnalyzer::new();
    let mut reporter = ConsoleReporter::new();
    if args.verbose {
        reporter = reporter.verbose();
    }

    eprintln!("{}: Watching for changes... (Ctrl+C to stop)", "Info".blue());

    loop {
        let paths = watcher.next_changes();
        for changed in paths {
            if let Some(set) = ignore_set.as_ref() {
                if is_ignored(&changed, set) {
                    continue;
                }
            }
            match analyzer.analyze_file(&changed, Some(&config)) {
                Ok(report) => {
                    if args.quiet {
                        reporter.report_quiet(&report);
                    } else {
                        reporter.report(&report);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}: {:#}", "Error".red(), changed.display(), e);
                }
            }
        }
    }
}

fn collect_content_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    if path == Path::new(STDIN_PATH) {
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if !entry.file_type().is_file() || !is_content_file(file_path, config) {
            continue;
        }
        if let Some(set) = ignore_set {
            if is_ignored(file_path, set) {
                continue;
            }
        }
        files.push(file_path.to_path_buf());
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn is_content_file(path: &Path, config: &Config) -> bool {
    if path
        .components()
        .any(|c| c.as_os_str() == "node_modules")
    {
        return false;
    }
    config.is_content_file(path)
}
