//! Scripture reference grammar.
//!
//! Turns a raw query string into a structured reference. The grammar is an
//! ordered list of rules whose shapes overlap, so trial order is a contract:
//! the first rule that matches the input *and* resolves its chapter wins,
//! and a rule whose chapter fails to resolve simply yields to the next rule.

use crate::numerals::NumeralTable;
use regex::Regex;
use std::sync::LazyLock;

/// Regex matching `<book><chapter>:<verse>` with an Arabic chapter.
#[allow(clippy::expect_used)]
static RE_ARABIC_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\p{Han}A-Za-z]+?)(\d+):(\d+)$").expect("valid regex: RE_ARABIC_SINGLE")
});

/// Regex matching `<book><chapter>:<start>-<end>` with an Arabic chapter.
#[allow(clippy::expect_used)]
static RE_ARABIC_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\p{Han}A-Za-z]+?)(\d+):(\d+)-(\d+)$").expect("valid regex: RE_ARABIC_RANGE")
});

/// Regex matching the whole-chapter shorthand `<book><chapter>`.
#[allow(clippy::expect_used)]
static RE_CHAPTER_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\p{Han}A-Za-z]+?)(\d+)$").expect("valid regex: RE_CHAPTER_ONLY")
});

/// Regex matching `<book><chinese-chapter>:<verse>`.
#[allow(clippy::expect_used)]
static RE_CHINESE_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\p{Han}A-Za-z]+?)([零一二两三四五六七八九十百千]+):(\d+)$")
        .expect("valid regex: RE_CHINESE_SINGLE")
});

/// A parsed, structurally valid scripture reference.
///
/// The book token is kept exactly as typed; disambiguation and
/// canonicalization happen downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Book token as typed, Chinese or English.
    pub book: String,
    /// Chapter number, always at least 1.
    pub chapter: u32,
    /// First verse of the requested range, defaults to 1.
    pub start_verse: u32,
    /// Last verse, `None` for a whole-chapter request.
    pub end_verse: Option<u32>,
}

type RuleFn = fn(&str, &NumeralTable) -> Option<ParsedReference>;

/// Grammar rules in trial order.
const GRAMMAR: &[(&str, RuleFn)] = &[
    ("arabic-single", arabic_single),
    ("arabic-range", arabic_range),
    ("chapter-only", chapter_only),
    ("chinese-single", chinese_single),
];

/// Parse a raw query into a structured reference.
///
/// All whitespace is stripped first, so `创 1 : 1` and `创1:1` are the same
/// query. Returns `None` when no grammar rule accepts the input.
#[must_use]
pub fn parse(raw: &str, numerals: &NumeralTable) -> Option<ParsedReference> {
    let input: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if input.is_empty() {
        return None;
    }
    GRAMMAR.iter().find_map(|&(name, rule)| {
        let parsed = rule(&input, numerals)?;
        tracing::debug!("grammar rule {name} matched {input}");
        Some(parsed)
    })
}

/// Resolve a chapter token to a positive chapter number.
///
/// All-digit tokens parse directly; anything else goes through the numeral
/// table. A token resolving to 0 is collapsed with "no match" - the two
/// cases are indistinguishable here, and that collapse is kept on purpose.
fn resolve_chapter(token: &str, numerals: &NumeralTable) -> Option<u32> {
    let value = if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        numerals.resolve(token)
    };
    value.filter(|&chapter| chapter != 0)
}

fn arabic_single(input: &str, numerals: &NumeralTable) -> Option<ParsedReference> {
    let caps = RE_ARABIC_SINGLE.captures(input)?;
    let chapter = resolve_chapter(caps.get(2)?.as_str(), numerals)?;
    let start_verse: u32 = caps.get(3)?.as_str().parse().ok()?;
    Some(ParsedReference {
        book: caps.get(1)?.as_str().to_string(),
        chapter,
        start_verse,
        end_verse: Some(start_verse),
    })
}

fn arabic_range(input: &str, numerals: &NumeralTable) -> Option<ParsedReference> {
    let caps = RE_ARABIC_RANGE.captures(input)?;
    let chapter = resolve_chapter(caps.get(2)?.as_str(), numerals)?;
    let start_verse: u32 = caps.get(3)?.as_str().parse().ok()?;
    let end_verse: u32 = caps.get(4)?.as_str().parse().ok()?;
    if end_verse < start_verse {
        return None;
    }
    Some(ParsedReference {
        book: caps.get(1)?.as_str().to_string(),
        chapter,
        start_verse,
        end_verse: Some(end_verse),
    })
}

fn chapter_only(input: &str, numerals: &NumeralTable) -> Option<ParsedReference> {
    let caps = RE_CHAPTER_ONLY.captures(input)?;
    let chapter = resolve_chapter(caps.get(2)?.as_str(), numerals)?;
    Some(ParsedReference {
        book: caps.get(1)?.as_str().to_string(),
        chapter,
        start_verse: 1,
        end_verse: None,
    })
}

fn chinese_single(input: &str, numerals: &NumeralTable) -> Option<ParsedReference> {
    let caps = RE_CHINESE_SINGLE.captures(input)?;
    let chapter = resolve_chapter(caps.get(2)?.as_str(), numerals)?;
    let start_verse: u32 = caps.get(3)?.as_str().parse().ok()?;
    Some(ParsedReference {
        book: caps.get(1)?.as_str().to_string(),
        chapter,
        start_verse,
        end_verse: Some(start_verse),
    })
}
