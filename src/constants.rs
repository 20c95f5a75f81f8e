//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Passage lookup constants.
pub mod lookup {
    /// Maximum verses returned for a query with no explicit end verse.
    ///
    /// Corpora carry no chapter-length metadata, so unranged queries are
    /// capped rather than allowed to walk an unbounded range.
    pub const MAX_UNRANGED_VERSES: u32 = 20;
}

/// Full-text search constants.
pub mod search {
    /// Maximum number of search results to return.
    pub const MAX_SEARCH_RESULTS: usize = 20;
}
