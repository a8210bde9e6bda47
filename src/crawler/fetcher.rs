//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with user agent and timeouts
//! - Issuing a single GET per page
//! - Classifying failures (transport errors are fatal, HTTP statuses are not)

use crate::config::Config;
use crate::CrawlError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A page body retrieved over HTTP
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status_code: u16,

    /// Response body decoded as text
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// Redirects follow reqwest's default policy.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use keyword_crawler::config::Config;
/// use keyword_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.crawler.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page with a single GET request
///
/// # Error Handling
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | HTTP 2xx | `Ok(FetchedPage)` |
/// | Any other HTTP status | Warning logged, `Ok(FetchedPage)` with the body |
/// | Connection refused, DNS failure, timeout | `Err(CrawlError::Http)` |
/// | Body cannot be read | `Err(CrawlError::Body)` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, CrawlError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| CrawlError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if response.url() != url {
        tracing::debug!("{} redirected to {}", url, response.url());
    }

    if !status.is_success() {
        tracing::warn!("Got status code {} for {}", status.as_u16(), url);
    }

    let body = response.text().await.map_err(|source| CrawlError::Body {
        url: url.to_string(),
        source,
    })?;

    tracing::trace!("Fetched {} bytes from {}", body.len(), url);

    Ok(FetchedPage {
        status_code: status.as_u16(),
        body,
    })
}
