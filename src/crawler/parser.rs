//! HTML page processing
//!
//! This module turns a fetched body into what the crawl needs:
//! - The page's visible text (script and style contents excluded)
//! - The deduplicated set of absolute links found in `<a href>` anchors
//! - The keyword match over the visible text

use crate::keyword::{find_keyword, KeywordMatch};
use crate::state::dedupe;
use crate::url::resolve_href;
use scraper::{Html, Node, Selector};
use url::Url;

/// Elements whose text content is never rendered
const NON_VISIBLE_ELEMENTS: &[&str] = &["script", "style"];

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Visible text, text nodes concatenated in document order
    pub text: String,

    /// Distinct absolute URLs linked from the page, in first-seen order
    pub links: Vec<Url>,

    /// Keyword search result over `text`
    pub keyword_match: KeywordMatch,
}

/// Parses HTML content, extracts links and searches for the keyword
///
/// The HTML parser recovers from malformed markup, so any body yields a
/// document; an empty body yields empty text and no links.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `page_url` - The URL the content was fetched from, used to resolve links
/// * `keyword` - The keyword to search for
/// * `context_margin` - Characters of context kept around a match
///
/// # Example
///
/// ```
/// use keyword_crawler::crawler::parse_page;
/// use url::Url;
///
/// let html = r#"<html><body><p>Hello World</p><a href="/page2">x</a></body></html>"#;
/// let page_url = Url::parse("http://example.com/").unwrap();
/// let parsed = parse_page(html, &page_url, "world", 6);
///
/// assert!(parsed.keyword_match.matched);
/// assert_eq!(parsed.links[0].as_str(), "http://example.com/page2");
/// ```
pub fn parse_page(html: &str, page_url: &Url, keyword: &str, context_margin: usize) -> ParsedPage {
    let document = Html::parse_document(html);

    let text = visible_text(&document);
    let links = extract_links(&document, page_url);
    let keyword_match = find_keyword(&text, keyword, context_margin);

    ParsedPage {
        text,
        links,
        keyword_match,
    }
}

/// Concatenates every visible text node in document order
///
/// Text inside `<script>` and `<style>` elements is dropped.
pub fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(content) = node.value() {
            let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => NON_VISIBLE_ELEMENTS.contains(&element.name()),
                _ => false,
            });

            if !hidden {
                text.push_str(content);
            }
        }
    }

    text
}

/// Extracts all followable links from the document's anchors
///
/// Each href goes through [`resolve_href`]; unresolvable and fragment-only
/// hrefs are dropped and duplicates removed.
pub fn extract_links(document: &Html, page_url: &Url) -> Vec<Url> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let links = document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(href, page_url));

    dedupe(links)
}
