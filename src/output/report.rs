//! Crawl report and output error types
//!
//! The report is the projection of a finished run: how many pages were
//! visited and which of them matched the keyword.

use crate::state::PageResult;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Summary of a completed crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Number of distinct pages visited
    pub total_visited: usize,

    /// Pages whose visible text contains the keyword, in visit order
    pub matches: Vec<PageResult>,

    /// Number of depth levels that were expanded
    pub levels_completed: u32,

    /// Visited pages that answered with a non-2xx status
    pub non_success_pages: usize,

    /// Wall-clock time of the run
    pub duration: Duration,
}

impl CrawlReport {
    /// Builds a report from every page result of a run
    pub fn new(results: Vec<PageResult>, levels_completed: u32, duration: Duration) -> Self {
        let total_visited = results.len();
        let non_success_pages = results.iter().filter(|r| !r.is_success()).count();
        let matches = results.into_iter().filter(|r| r.is_match).collect();

        Self {
            total_visited,
            matches,
            levels_completed,
            non_success_pages,
            duration,
        }
    }

    /// Returns the share of visited pages that matched, as a percentage
    pub fn match_rate(&self) -> f64 {
        if self.total_visited == 0 {
            return 0.0;
        }
        (self.matches.len() as f64 / self.total_visited as f64) * 100.0
    }
}
