//! Reference resolution pipeline.
//!
//! Orchestrates parse, disambiguation, name normalization and passage
//! lookup into a single four-way result. Every outcome is a plain return
//! value; nothing query-local is ever an error.

use crate::books::BookTables;
use crate::corpus::{self, CorpusIndex, Verse};
use crate::numerals::NumeralTable;
use crate::reference;

/// Outcome of resolving one typed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The reference resolved to at least one verse.
    Success {
        /// Composed passage title, e.g. `和合本 创世记 1章1-5节`.
        title: String,
        /// Matched verses in order.
        verses: Vec<Verse>,
    },
    /// The book token names more than one work.
    Ambiguous {
        /// Candidate book tokens, in table order.
        candidates: Vec<String>,
    },
    /// The input is blank or matched no grammar rule.
    ParseFailure,
    /// A well-formed, unambiguous reference with no corpus text.
    NotFound {
        /// Display name of the resolved book.
        book: String,
        /// Requested chapter.
        chapter: u32,
    },
}

/// Resolves typed references against an immutable table snapshot.
#[derive(Debug, Clone)]
pub struct Resolver {
    numerals: NumeralTable,
    books: BookTables,
}

impl Resolver {
    /// Build a resolver over fully loaded tables.
    #[must_use]
    pub const fn new(numerals: NumeralTable, books: BookTables) -> Self {
        Self { numerals, books }
    }

    /// Resolve a raw query against one translation's corpus.
    ///
    /// `translation_name` only feeds the composed title; corpus selection
    /// is the caller's job.
    #[must_use]
    pub fn resolve(&self, raw: &str, translation_name: &str, corpus: &CorpusIndex) -> Resolution {
        if raw.trim().is_empty() {
            return Resolution::ParseFailure;
        }

        let Some(parsed) = reference::parse(raw, &self.numerals) else {
            return Resolution::ParseFailure;
        };

        let candidates = self.books.resolve_ambiguous(&parsed.book);
        if candidates.len() > 1 {
            return Resolution::Ambiguous {
                candidates: candidates.into_iter().map(String::from).collect(),
            };
        }
        let candidate = candidates.into_iter().next().unwrap_or(parsed.book.as_str());

        let english = self.books.to_canonical_english(candidate);
        let display = self.books.to_display_chinese(english, candidate);

        let verses = corpus::lookup(
            corpus,
            english,
            parsed.chapter,
            parsed.start_verse,
            parsed.end_verse,
        );
        if verses.is_empty() {
            return Resolution::NotFound {
                book: display.to_string(),
                chapter: parsed.chapter,
            };
        }

        let first = verses.first().map_or(parsed.start_verse, |v| v.number);
        let last = verses.last().map_or(parsed.start_verse, |v| v.number);
        let title = format!(
            "{translation_name} {display} {}章{first}-{last}节",
            parsed.chapter
        );
        Resolution::Success { title, verses }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::numerals::NumeralCategory;
    use std::collections::HashMap;

    fn fixture_resolver() -> Resolver {
        let numerals = NumeralTable::new(vec![NumeralCategory {
            name: "units".to_string(),
            values: [("一", 1), ("三", 3)]
                .iter()
                .map(|&(k, v)| (k.to_string(), v))
                .collect(),
        }]);
        let aliases: HashMap<String, String> =
            [("创", "Genesis"), ("创世记", "Genesis"), ("约翰福音", "John")]
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect();
        let display_names: HashMap<String, String> = [("Genesis", "创世记"), ("John", "约翰福音")]
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let ambiguous: HashMap<String, Vec<String>> = [(
            "约翰".to_string(),
            vec![
                "约翰福音".to_string(),
                "约翰一书".to_string(),
                "约翰二书".to_string(),
            ],
        )]
        .into_iter()
        .collect();
        Resolver::new(numerals, BookTables::new(aliases, display_names, ambiguous))
    }

    fn fixture_corpus() -> CorpusIndex {
        CorpusIndex::from_text(
            "Genesis 1:1 起初，神创造天地。\n\
             Genesis 1:2 地是空虚混沌，渊面黑暗。\n\
             John 3:16 神爱世人。\n",
        )
    }

    #[test]
    fn resolves_single_verse() {
        let resolution = fixture_resolver().resolve("创1:1", "和合本", &fixture_corpus());
        match resolution {
            Resolution::Success { title, verses } => {
                assert!(title.contains("创世记 1章1-1节"), "title was {title}");
                assert!(title.starts_with("和合本"));
                assert_eq!(verses.len(), 1);
                assert_eq!(verses[0].text, "起初，神创造天地。");
            }
            other => panic!("Expected Success, got {other:?}"),
        }
    }

    #[test]
    fn whole_chapter_reports_actual_span() {
        let resolution = fixture_resolver().resolve("创1", "和合本", &fixture_corpus());
        match resolution {
            Resolution::Success { title, verses } => {
                assert_eq!(verses.len(), 2);
                assert!(title.contains("1章1-2节"), "title was {title}");
            }
            other => panic!("Expected Success, got {other:?}"),
        }
    }

    #[test]
    fn ambiguous_book_stops_before_lookup() {
        let resolution = fixture_resolver().resolve("约翰3:16", "和合本", &fixture_corpus());
        assert_eq!(
            resolution,
            Resolution::Ambiguous {
                candidates: vec![
                    "约翰福音".to_string(),
                    "约翰一书".to_string(),
                    "约翰二书".to_string(),
                ],
            }
        );
    }

    #[test]
    fn unambiguous_full_name_reaches_lookup() {
        let resolution = fixture_resolver().resolve("约翰福音3:16", "和合本", &fixture_corpus());
        match resolution {
            Resolution::Success { verses, .. } => assert_eq!(verses[0].text, "神爱世人。"),
            other => panic!("Expected Success, got {other:?}"),
        }
    }

    #[test]
    fn missing_chapter_is_not_found_with_display_name() {
        let resolution = fixture_resolver().resolve("创99:1", "和合本", &fixture_corpus());
        assert_eq!(
            resolution,
            Resolution::NotFound { book: "创世记".to_string(), chapter: 99 }
        );
    }

    #[test]
    fn blank_input_is_a_parse_failure() {
        let resolver = fixture_resolver();
        let corpus = fixture_corpus();
        assert_eq!(resolver.resolve("", "和合本", &corpus), Resolution::ParseFailure);
        assert_eq!(resolver.resolve("   ", "和合本", &corpus), Resolution::ParseFailure);
    }

    #[test]
    fn garbage_input_is_a_parse_failure() {
        let resolution = fixture_resolver().resolve("!!!", "和合本", &fixture_corpus());
        assert_eq!(resolution, Resolution::ParseFailure);
    }

    #[test]
    fn chinese_chapter_resolves_end_to_end() {
        let resolution = fixture_resolver().resolve("约翰福音三:16", "和合本", &fixture_corpus());
        match resolution {
            Resolution::Success { title, .. } => assert!(title.contains("3章16-16节")),
            other => panic!("Expected Success, got {other:?}"),
        }
    }
}
