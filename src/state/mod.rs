//! State management for crawl runs
//!
//! This module holds the data model of a single crawl: the request, the
//! per-page results, the visited set and the depth-level frontier.

mod crawl_state;
mod frontier;

pub use crawl_state::{CrawlRequest, CrawlState, PageResult};
pub use frontier::{dedupe, Frontier};
