//! Frontier and deduplication helpers
//!
//! The frontier holds the URLs scheduled for one depth level. It keeps
//! insertion order so pages are visited in the order they were discovered,
//! while refusing duplicates.
use std::collections::HashSet;
use std::hash::Hash;
use url::Url;

/// Ordered, duplicate-free set of URLs pending a visit at one depth level
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    urls: Vec<Url>,
    seen: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding just the starting URL
    pub fn seeded(start: Url) -> Self {
        let mut frontier = Self::new();
        frontier.push(start);
        frontier
    }

    /// Queues a URL, returning false if it was already queued
    pub fn push(&mut self, url: Url) -> bool {
        if !self.seen.insert(url.as_str().to_string()) {
            return false;
        }
        self.urls.push(url);
        true
    }

    /// Consumes the frontier, yielding URLs in discovery order
    pub fn into_urls(self) -> Vec<Url> {
        self.urls
    }
}

/// Removes duplicates, keeping the first occurrence of each element
///
/// The result holds exactly the distinct input elements, so applying it twice
/// gives the same output as applying it once.
pub fn dedupe<T, I>(items: I) -> Vec<T>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
