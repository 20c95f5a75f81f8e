//! Book name tables and resolution.
//!
//! Three independently loaded mappings cover book naming: aliases from typed
//! tokens to canonical English keys, display names back from English keys to
//! Chinese, and an ambiguity table for tokens naming more than one work.
//! Disambiguation must run before canonicalization; a candidate list longer
//! than one is terminal for the caller.

use std::collections::HashMap;

/// The three book-name mappings, immutable after load.
///
/// The display-name table is not cross-validated against the alias table; a
/// canonical key without a display entry falls back to the typed token.
#[derive(Debug, Clone, Default)]
pub struct BookTables {
    aliases: HashMap<String, String>,
    display_names: HashMap<String, String>,
    ambiguous: HashMap<String, Vec<String>>,
}

impl BookTables {
    /// Assemble the tables from their already-deserialized parts.
    #[must_use]
    pub fn new(
        aliases: HashMap<String, String>,
        display_names: HashMap<String, String>,
        ambiguous: HashMap<String, Vec<String>>,
    ) -> Self {
        Self { aliases, display_names, ambiguous }
    }

    /// Candidate works for a typed book token.
    ///
    /// A token absent from the ambiguity table is unambiguous: the result is
    /// a singleton list containing the token unchanged.
    #[must_use]
    pub fn resolve_ambiguous<'a>(&'a self, token: &'a str) -> Vec<&'a str> {
        self.ambiguous.get(token).map_or_else(
            || vec![token],
            |candidates| candidates.iter().map(String::as_str).collect(),
        )
    }

    /// Map a book token to its canonical English key.
    ///
    /// A token with no alias entry is assumed to already be canonical and is
    /// returned unchanged.
    #[must_use]
    pub fn to_canonical_english<'a>(&'a self, token: &'a str) -> &'a str {
        self.aliases.get(token).map_or(token, String::as_str)
    }

    /// Display Chinese name for a canonical English key.
    ///
    /// Never fails: a key without a display entry yields `fallback`.
    #[must_use]
    pub fn to_display_chinese<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.display_names.get(key).map_or(fallback, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn tables() -> BookTables {
        let aliases = [("创", "Genesis"), ("创世记", "Genesis"), ("约翰福音", "John")]
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let display_names = [("Genesis", "创世记"), ("John", "约翰福音")]
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let ambiguous = [(
            "约翰".to_string(),
            vec![
                "约翰福音".to_string(),
                "约翰一书".to_string(),
                "约翰二书".to_string(),
            ],
        )]
        .into_iter()
        .collect();
        BookTables::new(aliases, display_names, ambiguous)
    }

    #[test]
    fn unambiguous_token_is_singleton_of_itself() {
        assert_eq!(tables().resolve_ambiguous("创"), vec!["创"]);
    }

    #[test]
    fn ambiguous_token_lists_candidates_in_table_order() {
        assert_eq!(
            tables().resolve_ambiguous("约翰"),
            vec!["约翰福音", "约翰一书", "约翰二书"]
        );
    }

    #[test]
    fn canonicalizes_known_aliases() {
        assert_eq!(tables().to_canonical_english("创"), "Genesis");
        assert_eq!(tables().to_canonical_english("创世记"), "Genesis");
    }

    #[test]
    fn unknown_token_passes_through_unchanged() {
        assert_eq!(tables().to_canonical_english("Genesis"), "Genesis");
    }

    #[test]
    fn display_name_falls_back_to_supplied_token() {
        let t = tables();
        assert_eq!(t.to_display_chinese("Genesis", "创"), "创世记");
        assert_eq!(t.to_display_chinese("Obadiah", "俄"), "俄");
    }

    #[test]
    fn round_trip_naming() {
        let t = tables();
        let english = t.to_canonical_english("创");
        assert_eq!(t.to_display_chinese(english, "创"), "创世记");
    }
}
