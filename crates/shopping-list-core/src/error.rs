//! Error types for the shopping list core.
//!
//! Every list operation is total. The only fallible step is parsing the
//! string values that arrive from `<select>` controls into typed categories.

use thiserror::Error;

/// A category string that names neither a [`Category`](crate::Category)
/// nor the "All" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: '{value}'")]
pub struct ParseCategoryError {
    /// The rejected input, as received.
    pub value: String,
}

impl ParseCategoryError {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
