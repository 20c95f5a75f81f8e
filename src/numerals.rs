//! Chinese numeral resolution for chapter numbers.
//!
//! Chapters typed as Chinese numerals (`三`, `十二`, `一百五十`) resolve
//! against an ordered list of numeral categories. Matching is exact-literal
//! only; no arithmetic decomposition of compound numerals is attempted, so
//! the table must enumerate every chapter number it intends to support.

use serde::Deserialize;
use std::collections::HashMap;

/// One named group of numeral literals.
#[derive(Debug, Clone, Deserialize)]
pub struct NumeralCategory {
    /// Category label, used for diagnostics only.
    pub name: String,
    /// Numeral literal to its integer value.
    pub values: HashMap<String, u32>,
}

/// Ordered list of numeral categories.
///
/// Category order is a contract: categories are scanned front to back and
/// the first exact match wins, so a literal defined in several categories
/// resolves to the earliest one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct NumeralTable {
    categories: Vec<NumeralCategory>,
}

impl NumeralTable {
    /// Build a table from categories, preserving their order.
    #[must_use]
    pub fn new(categories: Vec<NumeralCategory>) -> Self {
        Self { categories }
    }

    /// Resolve a Chinese numeral literal to its integer value.
    ///
    /// Returns `None` when no category defines the literal.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<u32> {
        self.categories
            .iter()
            .find_map(|category| category.values.get(token).copied())
    }
}
