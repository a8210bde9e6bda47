//! Markdown report generation
//!
//! This module writes a human-readable markdown report of a crawl run,
//! including the request, overall statistics and the matching pages.

use crate::output::{CrawlReport, OutputResult};
use crate::state::CrawlRequest;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown report and writes it to a file
///
/// # Arguments
///
/// * `report` - The crawl report
/// * `request` - The request the report answers
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to write the report
pub fn write_markdown_report(
    report: &CrawlReport,
    request: &CrawlRequest,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_report(report, request);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_report(report: &CrawlReport, request: &CrawlRequest) -> String {
    let mut md = String::new();

    md.push_str("# Keyword Crawl Report\n\n");

    md.push_str("## Request\n\n");
    md.push_str(&format!("- **Start URL**: {}\n", request.start_url()));
    md.push_str(&format!("- **Keyword**: {}\n", request.keyword()));
    md.push_str(&format!("- **Max Depth**: {}\n\n", request.max_depth()));

    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Pages Visited**: {}\n", report.total_visited));
    md.push_str(&format!("- **Matching Pages**: {}\n", report.matches.len()));
    md.push_str(&format!("- **Match Rate**: {:.2}%\n", report.match_rate()));
    md.push_str(&format!(
        "- **Non-Success Responses**: {}\n",
        report.non_success_pages
    ));
    md.push_str(&format!(
        "- **Levels Expanded**: {}\n",
        report.levels_completed
    ));
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n\n",
        report.duration.as_secs_f64()
    ));

    md.push_str("## Matches\n\n");
    if report.matches.is_empty() {
        md.push_str("No pages matched.\n");
    } else {
        md.push_str("| URL | Status | Context |\n");
        md.push_str("|-----|--------|---------|\n");
        for page in &report.matches {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                page.url,
                page.status_code,
                escape_cell(&page.match_context)
            ));
        }
    }

    md
}

/// Escapes characters that would break a markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
