//! `VerseFinder` - Chinese/English scripture reference lookup.
//!
//! Resolves free-form references such as `创1:1`, `创3:1-5`, `创三:16` or
//! `John3:16` against preloaded translation corpora and returns the matching
//! passage text, an ambiguity prompt, or a not-found answer.

// Re-export public modules for use in integration tests and as a library
pub mod books;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod loader;
pub mod numerals;
pub mod pipeline;
pub mod reference;
pub mod search;
