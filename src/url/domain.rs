use url::Url;

/// Extracts the host from a URL
///
/// The `url` crate already lowercases registered domain names, so the returned
/// host can be compared directly. Ports are not part of the host.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use keyword_crawler::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM:8080/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com"));
///
/// let url = Url::parse("mailto:someone@example.com").unwrap();
/// assert_eq!(extract_host(&url), None);
/// ```
pub fn extract_host(url: &Url) -> Option<&str> {
    url.host_str().filter(|h| !h.is_empty())
}

/// Returns true when both URLs name the same host
///
/// Only the hostname is compared; scheme and port are ignored. A URL without
/// a host never matches anything.
pub fn same_host(a: &Url, b: &Url) -> bool {
    match (extract_host(a), extract_host(b)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
