//! Full-text search over a corpus index.
//!
//! Substring search on verse text, independent of the resolution pipeline.
//! Hits are reported by address (book key, chapter, verse) in sorted order
//! and capped by the caller-supplied limit.

use crate::corpus::CorpusIndex;

/// One full-text search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Canonical English book key.
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Full verse text.
    pub text: String,
}

/// Find verses whose text contains `query`.
///
/// The match is a plain case-sensitive substring test. A blank query yields
/// no hits. Results are sorted by (book, chapter, verse) and truncated to
/// `limit`.
#[must_use]
pub fn search_text(corpus: &CorpusIndex, query: &str, limit: usize) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = corpus
        .entries()
        .filter(|&(_, text)| text.contains(query))
        .filter_map(|(key, text)| {
            let (book, chapter, verse) = split_key(key)?;
            Some(SearchHit { book, chapter, verse, text: text.to_string() })
        })
        .collect();

    hits.sort_by(|a, b| {
        (&a.book, a.chapter, a.verse).cmp(&(&b.book, b.chapter, b.verse))
    });
    hits.truncate(limit);
    hits
}

/// Split a composite `{book}{chapter}:{verse}` key back into its parts.
///
/// The chapter is the trailing digit run before the colon, so book keys
/// with a leading digit (`1John`) split correctly.
fn split_key(key: &str) -> Option<(String, u32, u32)> {
    let (address, verse) = key.rsplit_once(':')?;
    let verse: u32 = verse.parse().ok()?;

    let chapter_start = address
        .char_indices()
        .rfind(|&(_, c)| !c.is_ascii_digit())
        .map(|(i, c)| i + c.len_utf8())?;
    let (book, chapter) = address.split_at(chapter_start);
    if book.is_empty() || chapter.is_empty() {
        return None;
    }
    let chapter: u32 = chapter.parse().ok()?;
    Some((book.to_string(), chapter, verse))
}
