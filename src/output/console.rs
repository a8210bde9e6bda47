//! Console output for crawl results

use crate::output::CrawlReport;
use crate::state::CrawlRequest;

/// Formats the line announcing a crawl
pub fn format_banner(request: &CrawlRequest) -> String {
    format!(
        "Starting crawler with URL:{}, Keyword:{}, Depth:{}",
        request.start_url(),
        request.keyword(),
        request.max_depth()
    )
}

/// Formats the crawl results as printed on stdout
///
/// One summary line followed by one `<url> => '<context>'` line per match.
pub fn format_report(report: &CrawlReport, keyword: &str) -> String {
    let mut out = format!(
        "Crawled {} pages. Found {} pages with the term '{}'\n",
        report.total_visited,
        report.matches.len(),
        keyword
    );

    for page in &report.matches {
        out.push_str(&format!("{} => '{}'\n", page.url, page.match_context));
    }

    out
}

/// Prints the crawl results to stdout
pub fn print_report(report: &CrawlReport, keyword: &str) {
    print!("{}", format_report(report, keyword));
}
