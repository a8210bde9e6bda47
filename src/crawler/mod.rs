//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML parsing, visible-text and link extraction
//! - Overall crawl coordination across depth levels

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use parser::{extract_links, parse_page, visible_text, ParsedPage};

use crate::config::Config;
use crate::output::CrawlReport;
use crate::state::CrawlRequest;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Visit the start URL and expand same-host links level by level
/// 3. Search every visited page for the keyword
/// 4. Return the aggregated report
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `request` - The validated crawl request
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed successfully
/// * `Err(CrawlError)` - Crawl failed
pub async fn crawl(config: Config, request: CrawlRequest) -> Result<CrawlReport, CrawlError> {
    run_crawl(config, request).await
}
