//! URL handling module for Keyword-Crawler
//!
//! This module provides href resolution, host extraction and same-host
//! scoping, plus validation of the crawl's starting URL.

mod domain;
mod normalize;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use domain::{extract_host, same_host};
pub use normalize::resolve_href;

/// Parses and validates the URL a crawl starts from
///
/// The starting URL must be absolute, use the `http` or `https` scheme and
/// carry a host, since every discovered link is scoped against that host.
///
/// # Examples
///
/// ```
/// use keyword_crawler::url::parse_start_url;
///
/// let url = parse_start_url("http://example.com").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/");
///
/// assert!(parse_start_url("ftp://example.com/").is_err());
/// assert!(parse_start_url("example.com").is_err());
/// ```
pub fn parse_start_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if extract_host(&url).is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
