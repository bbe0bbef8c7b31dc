//! Error types for the ranking core.
//!
//! Extraction and aggregation never fail: an item that cannot be ranked is
//! represented as unresolved. These errors only cover building an item set,
//! compiling its match patterns, and reading or writing reports.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of extraction itself.
#[derive(Debug, Error)]
pub enum Error {
    /// An item set must contain at least one label.
    #[error("item set is empty")]
    EmptyItemSet,

    /// A label was empty after trimming.
    #[error("item label at position {0} is empty")]
    EmptyLabel(usize),

    /// The same label (case-insensitively) appears twice.
    #[error("duplicate item label: {0}")]
    DuplicateItem(String),

    /// A label-derived pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
