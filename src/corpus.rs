//! Corpus indexing and bounded passage lookup.

use crate::constants::lookup::MAX_UNRANGED_VERSES;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex matching one corpus line: `<bookCode> <chapter>:<verse> <text>`.
#[allow(clippy::expect_used)]
static RE_CORPUS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(\d+):(\d+)\s+(.+)$").expect("valid regex: RE_CORPUS_LINE")
});

/// Supported Bible translations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Translation {
    /// Chinese Union Version (和合本).
    #[default]
    Cuv,
    /// King James Version.
    Kjv,
}

impl Translation {
    /// All translations in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Cuv, Self::Kjv]
    }

    /// Display name of this translation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cuv => "和合本",
            Self::Kjv => "KJV",
        }
    }

    /// Corpus source file name for this translation.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Cuv => "cuv.txt",
            Self::Kjv => "kjv.txt",
        }
    }

    /// Try to detect a translation from text like "和合本" or "kjv"
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        let upper = text.to_uppercase();
        if text.contains("和合") || upper.contains("CUV") {
            return Some(Self::Cuv);
        }
        if upper.contains("KJV") {
            return Some(Self::Kjv);
        }
        None
    }
}

/// Verse text for one translation, keyed by `{book}{chapter}:{verse}`.
///
/// Built once at startup and immutable thereafter. Verse addresses are exact
/// integers with no zero padding, so `Genesis1:1` and `Genesis1:10` are
/// distinct keys.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    entries: HashMap<String, String>,
}

impl CorpusIndex {
    /// Build an index from line-oriented source text.
    ///
    /// Each line must match `<bookCode> <chapter>:<verse> <text>`; blank
    /// lines and lines of any other shape are discarded silently.
    #[must_use]
    pub fn from_text(source: &str) -> Self {
        let mut entries = HashMap::new();
        for line in source.lines() {
            if let Some(caps) = RE_CORPUS_LINE.captures(line.trim()) {
                let (Some(book), Some(chapter), Some(verse), Some(text)) =
                    (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
                else {
                    continue;
                };
                let key = format!("{}{}:{}", book.as_str(), chapter.as_str(), verse.as_str());
                entries.insert(key, text.as_str().trim().to_string());
            }
        }
        Self { entries }
    }

    /// Verse text for a composite key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of indexed verses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no verses at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all (key, text) pairs in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One matched verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Verse number within the chapter.
    pub number: u32,
    /// Verse text.
    pub text: String,
}

/// Look up a verse range against a corpus.
///
/// With no explicit end verse the range is capped at
/// [`MAX_UNRANGED_VERSES`] entries. Iteration stops at the first missing
/// verse: a chapter is exactly the contiguous run of addressable verses, so
/// a gap terminates the range even if later verses exist. An empty result
/// means not found.
#[must_use]
pub fn lookup(
    corpus: &CorpusIndex,
    book: &str,
    chapter: u32,
    start_verse: u32,
    end_verse: Option<u32>,
) -> Vec<Verse> {
    let end = end_verse.unwrap_or_else(|| start_verse.saturating_add(MAX_UNRANGED_VERSES - 1));
    let mut verses = Vec::new();
    for number in start_verse..=end {
        let key = format!("{book}{chapter}:{number}");
        match corpus.get(&key) {
            Some(text) => verses.push(Verse { number, text: text.to_string() }),
            None => break,
        }
    }
    verses
}
