//! Crawl request, per-page results and the state owned by one crawl run
use crate::state::Frontier;
use crate::url::parse_start_url;
use crate::CrawlError;
use std::collections::HashSet;
use url::Url;

/// Immutable input to a crawl run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    start_url: Url,
    keyword: String,
    max_depth: u32,
}

impl CrawlRequest {
    /// Validates and builds a crawl request
    ///
    /// # Arguments
    ///
    /// * `start_url` - Absolute http(s) URL the crawl starts from
    /// * `keyword` - Text to search for; must not be empty
    /// * `max_depth` - Number of depth levels to expand (0 visits nothing)
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlRequest)` - The validated request
    /// * `Err(CrawlError)` - The URL is unusable or the keyword is empty
    pub fn new(
        start_url: &str,
        keyword: impl Into<String>,
        max_depth: u32,
    ) -> Result<Self, CrawlError> {
        let start_url = parse_start_url(start_url)?;
        let keyword = keyword.into();

        if keyword.is_empty() {
            return Err(CrawlError::InvalidRequest(
                "keyword cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            start_url,
            keyword,
            max_depth,
        })
    }

    pub fn start_url(&self) -> &Url {
        &self.start_url
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

/// Outcome of visiting one URL
///
/// Created once per visited URL and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// The URL that was fetched
    pub url: String,

    /// Whether the page's visible text contains the keyword
    pub is_match: bool,

    /// Excerpt around the first occurrence; empty when not a match
    pub match_context: String,

    /// HTTP status the page was served with
    pub status_code: u16,
}

impl PageResult {
    /// Returns true if the page was served with a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Mutable state of a single crawl run
///
/// Tracks which URLs have been visited (each at most once), their results in
/// visit order, the frontier for the current depth level and the level itself.
#[derive(Debug)]
pub struct CrawlState {
    visited: HashSet<String>,
    results: Vec<PageResult>,
    frontier: Frontier,
    level: u32,
}

impl CrawlState {
    /// Initial state: nothing visited, the start URL on the frontier, level 0
    pub fn new(start_url: Url) -> Self {
        Self {
            visited: HashSet::new(),
            results: Vec::new(),
            frontier: Frontier::seeded(start_url),
            level: 0,
        }
    }

    /// Current depth level (number of completed expansions)
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Records the result for a newly visited URL
    ///
    /// Returns false and leaves the state untouched if the URL already has a
    /// result.
    pub fn record(&mut self, result: PageResult) -> bool {
        if !self.visited.insert(result.url.clone()) {
            return false;
        }
        self.results.push(result);
        true
    }

    /// Removes and returns the URLs scheduled for the current level
    pub fn take_frontier(&mut self) -> Vec<Url> {
        std::mem::take(&mut self.frontier).into_urls()
    }

    /// Installs the next level's frontier and moves to the next level
    pub fn advance(&mut self, next: Frontier) {
        self.frontier = next;
        self.level += 1;
    }

    /// Consumes the state, yielding results in visit order
    pub fn into_results(self) -> Vec<PageResult> {
        self.results
    }
}
