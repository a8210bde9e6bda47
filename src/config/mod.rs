//! Configuration module for Keyword-Crawler
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, `Config::default()` applies.
//!
//! # Example
//!
//! ```no_run
//! use keyword_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Request timeout: {}s", config.crawler.request_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, MatcherConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
