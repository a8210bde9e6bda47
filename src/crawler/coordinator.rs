//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop:
//! - Expanding the frontier one depth level at a time
//! - Fetching and processing every page on the current level
//! - Scoping discovered links to the host of the page they were found on
//! - Collecting per-page results into the final report

use crate::config::{validate, Config};
use crate::crawler::{build_http_client, fetch_page, parse_page};
use crate::output::CrawlReport;
use crate::state::{CrawlRequest, CrawlState, Frontier, PageResult};
use crate::url::same_host;
use crate::CrawlError;
use reqwest::Client;
use std::time::Instant;
use url::Url;

/// Result of visiting a single page
#[derive(Debug)]
struct PageVisit {
    result: PageResult,
    links: Vec<Url>,
}

/// Main crawler coordinator structure
///
/// A coordinator drives exactly one crawl request. All crawl state is owned by
/// the run itself and dropped when it finishes.
pub struct Coordinator {
    config: Config,
    request: CrawlRequest,
    client: Client,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `request` - What to crawl and what to look for
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlError)` - The configuration is invalid or the HTTP client
    ///   could not be built
    pub fn new(config: Config, request: CrawlRequest) -> Result<Self, CrawlError> {
        validate(&config)?;
        let client = build_http_client(&config)?;

        Ok(Self {
            config,
            request,
            client,
        })
    }

    pub fn request(&self) -> &CrawlRequest {
        &self.request
    }

    /// Runs the crawl to completion
    ///
    /// Each iteration of the loop is one depth level:
    /// 1. Take the frontier, skipping URLs that already have a result
    /// 2. Fetch and process each page, recording its result
    /// 3. Queue links that are unvisited and on the same host as their page
    /// 4. Install the new frontier and move to the next level
    ///
    /// The loop stops after `max_depth` levels or when the frontier runs dry.
    /// Any fetch or body failure aborts the run without partial results.
    pub async fn run(&self) -> Result<CrawlReport, CrawlError> {
        let max_depth = self.request.max_depth();
        let start_time = Instant::now();

        tracing::info!(
            "Starting crawl at {} for '{}' (max depth {})",
            self.request.start_url(),
            self.request.keyword(),
            max_depth
        );

        let mut state = CrawlState::new(self.request.start_url().clone());

        while state.level() < max_depth {
            let level_urls = state.take_frontier();
            if level_urls.is_empty() {
                tracing::info!("Frontier is empty, crawl complete");
                break;
            }

            tracing::info!(
                "Level {}: {} URLs to visit",
                state.level(),
                level_urls.len()
            );

            let mut next = Frontier::new();

            for url in level_urls {
                if state.is_visited(url.as_str()) {
                    tracing::debug!("Already visited {}, skipping", url);
                    continue;
                }

                let visit = self.visit(&url).await?;
                state.record(visit.result);

                for link in visit.links {
                    if state.is_visited(link.as_str()) {
                        continue;
                    }

                    if !same_host(&url, &link) {
                        tracing::trace!("Not following off-host link {}", link);
                        continue;
                    }

                    next.push(link);
                }
            }

            state.advance(next);
        }

        let levels_completed = state.level();
        let report = CrawlReport::new(state.into_results(), levels_completed, start_time.elapsed());

        tracing::info!(
            "Crawl completed: {} pages visited, {} matches in {:?}",
            report.total_visited,
            report.matches.len(),
            report.duration
        );

        Ok(report)
    }

    /// Fetches and processes a single page
    async fn visit(&self, url: &Url) -> Result<PageVisit, CrawlError> {
        tracing::debug!("Processing URL: {}", url);

        let fetched = fetch_page(&self.client, url).await?;

        let parsed = parse_page(
            &fetched.body,
            url,
            self.request.keyword(),
            self.config.matcher.context_margin,
        );

        if parsed.keyword_match.matched {
            tracing::debug!("Keyword found on {}", url);
        }

        Ok(PageVisit {
            result: PageResult {
                url: url.to_string(),
                is_match: parsed.keyword_match.matched,
                match_context: parsed.keyword_match.context,
                status_code: fetched.status_code,
            },
            links: parsed.links,
        })
    }
}

/// Runs a complete crawl operation
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `request` - The crawl request
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed successfully
/// * `Err(CrawlError)` - Crawl failed with an error
///
/// # Example
///
/// ```no_run
/// use keyword_crawler::config::Config;
/// use keyword_crawler::crawler::run_crawl;
/// use keyword_crawler::state::CrawlRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let request = CrawlRequest::new("https://example.com/", "rust", 2)?;
/// let report = run_crawl(Config::default(), request).await?;
/// println!("{} pages visited", report.total_visited);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config, request: CrawlRequest) -> Result<CrawlReport, CrawlError> {
    let coordinator = Coordinator::new(config, request)?;
    coordinator.run().await
}
