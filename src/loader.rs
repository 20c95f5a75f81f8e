//! Startup loading of mapping tables and corpora.
//!
//! The four mapping tables are required: any read or parse failure is fatal
//! and the resolver is never constructed. Corpus files are not: a
//! translation that fails to load is logged and served as an empty index,
//! so every lookup against it reports not-found naturally.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::books::BookTables;
use crate::config::Config;
use crate::corpus::{CorpusIndex, Translation};
use crate::error::{Error, Result};
use crate::numerals::NumeralTable;
use crate::pipeline::Resolver;

/// A fully loaded, immutable snapshot: the armed resolver plus corpora.
///
/// Nothing in here changes after [`load`] returns; queries always observe
/// the same data.
#[derive(Debug)]
pub struct Library {
    /// The armed resolution pipeline.
    pub resolver: Resolver,
    corpora: HashMap<Translation, CorpusIndex>,
}

impl Library {
    /// Corpus index for a translation (empty if its source failed to load).
    #[must_use]
    pub fn corpus(&self, translation: Translation) -> &CorpusIndex {
        static EMPTY: LazyLock<CorpusIndex> = LazyLock::new(CorpusIndex::default);
        self.corpora.get(&translation).map_or_else(|| &*EMPTY, |c| c)
    }
}

/// Load every table and corpus under the configured data directory.
pub async fn load(config: &Config) -> Result<Library> {
    let resolver = load_tables(&config.data_dir)?;
    let corpora = load_corpora(&config.data_dir).await;
    Ok(Library { resolver, corpora })
}

/// Load the four mapping tables, failing fast on the first problem.
fn load_tables(dir: &Path) -> Result<Resolver> {
    let numerals: NumeralTable = read_table(
        dir,
        "numerals.json",
        "Chinese-numeral chapters cannot resolve without it",
    )?;
    let aliases: HashMap<String, String> = read_table(
        dir,
        "book_aliases.json",
        "book tokens cannot map to corpus keys without it",
    )?;
    let display_names: HashMap<String, String> = read_table(
        dir,
        "book_names.json",
        "display names fall back to typed tokens without it",
    )?;
    let ambiguous: HashMap<String, Vec<String>> = read_table(
        dir,
        "ambiguous_books.json",
        "ambiguous tokens would silently pick one work without it",
    )?;

    Ok(Resolver::new(
        numerals,
        BookTables::new(aliases, display_names, ambiguous),
    ))
}

/// Read and deserialize one JSON mapping table.
fn read_table<T: serde::de::DeserializeOwned>(
    dir: &Path,
    file_name: &str,
    hint: &'static str,
) -> Result<T> {
    let path = dir.join(file_name);
    let content = fs_err::read_to_string(&path)
        .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display()), hint))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display()), hint))
}

/// Load all translation corpora concurrently.
async fn load_corpora(dir: &Path) -> HashMap<Translation, CorpusIndex> {
    let loads = Translation::all().iter().map(|&t| load_corpus(dir, t));
    let indexes = futures::future::join_all(loads).await;
    Translation::all().iter().copied().zip(indexes).collect()
}

/// Load one translation's corpus, degrading to an empty index on failure.
async fn load_corpus(dir: &Path, translation: Translation) -> CorpusIndex {
    let path = dir.join(translation.file_name());
    match tokio::fs::read_to_string(&path).await {
        Ok(source) => {
            let index = CorpusIndex::from_text(&source);
            tracing::info!(
                "Loaded {} verses for {} from {}",
                index.len(),
                translation.name(),
                path.display()
            );
            index
        }
        Err(e) => {
            let err = Error::corpus(translation.name(), format!("{}: {e}", path.display()));
            tracing::warn!("{err}; serving an empty index");
            CorpusIndex::default()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::fs;

    fn config_for(dir: &Path) -> Config {
        Config::with_data_dir(dir.to_path_buf())
    }

    fn write_minimal_tables(dir: &Path) {
        fs::write(
            dir.join("numerals.json"),
            r#"[{"name": "units", "values": {"一": 1, "三": 3}}]"#,
        )
        .unwrap();
        fs::write(dir.join("book_aliases.json"), r#"{"创": "Genesis"}"#).unwrap();
        fs::write(dir.join("book_names.json"), r#"{"Genesis": "创世记"}"#).unwrap();
        fs::write(dir.join("ambiguous_books.json"), "{}").unwrap();
    }

    #[tokio::test]
    async fn missing_mapping_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // No tables written at all
        let config = config_for(dir.path());
        let result = load(&config).await;
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[tokio::test]
    async fn malformed_mapping_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_tables(dir.path());
        fs::write(dir.path().join("book_aliases.json"), "not json").unwrap();
        let config = config_for(dir.path());
        let result = load(&config).await;
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[tokio::test]
    async fn missing_corpus_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_tables(dir.path());
        // No cuv.txt / kjv.txt written
        let library = load(&config_for(dir.path())).await.unwrap();
        assert!(library.corpus(Translation::Cuv).is_empty());
        assert!(library.corpus(Translation::Kjv).is_empty());
    }

    #[tokio::test]
    async fn loads_corpus_when_present() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_tables(dir.path());
        fs::write(dir.path().join("cuv.txt"), "Genesis 1:1 起初，神创造天地。\n").unwrap();
        let library = load(&config_for(dir.path())).await.unwrap();
        assert_eq!(library.corpus(Translation::Cuv).len(), 1);
        assert!(library.corpus(Translation::Kjv).is_empty());
    }
}
