use url::Url;

/// Resolves an anchor's href against the page it was found on
///
/// # Resolution Rules
///
/// 1. Empty hrefs are skipped
/// 2. Fragment-only hrefs (`#section`) point back at the same page and are skipped
/// 3. Path-absolute hrefs (`/path`) are resolved against the page's scheme and host
/// 4. Anything else is taken as an absolute URL; hrefs that do not parse as one
///    (including non-rooted relative paths such as `page.html`) are skipped
///
/// Parse failures never propagate: a malformed link only drops that link.
///
/// # Arguments
///
/// * `href` - The raw href attribute value
/// * `page_url` - The absolute URL of the page containing the anchor
///
/// # Returns
///
/// * `Some(Url)` - The absolute URL the href points to
/// * `None` - The href was skipped
///
/// # Examples
///
/// ```
/// use url::Url;
/// use keyword_crawler::url::resolve_href;
///
/// let page = Url::parse("http://example.com/docs/index.html").unwrap();
///
/// let link = resolve_href("/page2", &page).unwrap();
/// assert_eq!(link.as_str(), "http://example.com/page2");
///
/// assert!(resolve_href("#top", &page).is_none());
/// ```
pub fn resolve_href(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let resolved = if href.starts_with('/') {
        page_url.join(href)
    } else {
        Url::parse(href)
    };

    match resolved {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::trace!("Skipping unparseable link {:?} on {}: {}", href, page_url, e);
            None
        }
    }
}
