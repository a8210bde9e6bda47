//! Output module for presenting crawl results
//!
//! This module handles:
//! - The crawl report produced at the end of a run
//! - Printing results to the console
//! - Writing an optional markdown report file

mod console;
mod markdown;
mod report;

pub use console::{format_banner, format_report, print_report};
pub use markdown::{format_markdown_report, write_markdown_report};
pub use report::{CrawlReport, OutputError, OutputResult};
