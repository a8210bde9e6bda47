//! Keyword-Crawler main entry point
//!
//! This is the command-line interface for the Keyword-Crawler.

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use keyword_crawler::config::{load_config, Config};
use keyword_crawler::crawler::crawl;
use keyword_crawler::output::{format_banner, print_report, write_markdown_report};
use keyword_crawler::state::CrawlRequest;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Keyword-Crawler: search a website for a keyword
///
/// Crawls breadth-first from START_URL, following only links on the same
/// host, and reports every page whose visible text contains KEYWORD.
#[derive(Parser, Debug)]
#[command(name = "keyword-crawler")]
#[command(version)]
#[command(about = "Search a website for a keyword", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Keyword to search for (case-insensitive)
    #[arg(value_name = "KEYWORD", value_parser = NonEmptyStringValueParser::new())]
    keyword: String,

    /// Number of depth levels to crawl [default: 2, or crawler.default-depth]
    #[arg(value_name = "DEPTH")]
    depth: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write a markdown report to this path
    #[arg(short, long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    let depth = cli.depth.unwrap_or(config.crawler.default_depth);
    let request = CrawlRequest::new(&cli.start_url, cli.keyword.clone(), depth)?;

    let summary_path = cli
        .summary
        .clone()
        .or_else(|| config.output.summary_path.as_ref().map(PathBuf::from));

    println!("{}", format_banner(&request));

    let report = match crawl(config, request.clone()).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    print_report(&report, request.keyword());

    if let Some(path) = summary_path {
        write_summary(&report, &request, &path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        tracing::info!("Summary written to: {}", path.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("keyword_crawler=info,warn"),
            1 => EnvFilter::new("keyword_crawler=debug,info"),
            2 => EnvFilter::new("keyword_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Writes the markdown report
fn write_summary(
    report: &keyword_crawler::CrawlReport,
    request: &CrawlRequest,
    path: &Path,
) -> keyword_crawler::Result<()> {
    write_markdown_report(report, request, path)?;
    Ok(())
}
