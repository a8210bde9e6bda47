//! Keyword matching against a page's visible text
//!
//! Matching is case-insensitive and only the first occurrence in document
//! order is reported. On a hit, a short window of the surrounding text is
//! returned as the match context.
//!
//! Positions and margins are counted in characters rather than bytes so the
//! context window never splits a multibyte character.

/// Characters of context kept on each side of a match
pub const DEFAULT_CONTEXT_MARGIN: usize = 6;

/// Outcome of searching a page's text for a keyword
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordMatch {
    /// Whether the keyword occurs in the text
    pub matched: bool,

    /// Excerpt around the first occurrence; empty when there is no match
    pub context: String,
}

impl KeywordMatch {
    /// A result reporting no occurrence
    pub fn none() -> Self {
        Self::default()
    }
}

/// Searches `text` for the first case-insensitive occurrence of `keyword`
///
/// The context window spans `margin` characters before the match start and
/// `margin` characters after the match end, clamped to the text. Newlines are
/// removed from the excerpt and leading/trailing spaces are trimmed.
///
/// # Examples
///
/// ```
/// use keyword_crawler::keyword::find_keyword;
///
/// let hit = find_keyword("Say Hello World to everyone", "world", 6);
/// assert!(hit.matched);
/// assert_eq!(hit.context, "Hello World to ev");
///
/// let miss = find_keyword("Nothing here", "absent", 6);
/// assert!(!miss.matched);
/// assert_eq!(miss.context, "");
/// ```
pub fn find_keyword(text: &str, keyword: &str, margin: usize) -> KeywordMatch {
    if text.is_empty() {
        return KeywordMatch::none();
    }

    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = keyword.chars().collect();

    let Some(start) = find_ignore_case(&haystack, &needle) else {
        return KeywordMatch::none();
    };

    let context_start = start.saturating_sub(margin);
    let context_end = (start + needle.len() + margin).min(haystack.len());

    let context: String = haystack[context_start..context_end]
        .iter()
        .filter(|&&c| c != '\n')
        .collect();

    KeywordMatch {
        matched: true,
        context: context.trim_matches(' ').to_string(),
    }
}

/// Returns the char index of the first case-insensitive occurrence of `needle`
fn find_ignore_case(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len()).find(|&i| {
        haystack[i..i + needle.len()]
            .iter()
            .zip(needle)
            .all(|(&a, &b)| chars_eq_ignore_case(a, b))
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
