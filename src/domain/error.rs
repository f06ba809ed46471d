//! Validation errors for domain invariants.
//!
//! Returned by `try_new` constructors and entity mutators. Every variant is
//! detected before any persistence call, so a validation failure never leaves
//! a partial write behind.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Ticker codes are exactly four ASCII digits.
    #[error("ticker code must be exactly 4 digits, got {value:?}")]
    InvalidTickerCode { value: String },

    /// Memo content must be non-empty after trimming.
    #[error("memo content is required")]
    EmptyNoteBody,

    /// Memo content length is capped after trimming.
    #[error("memo content must be at most {max} characters, got {length}")]
    NoteBodyTooLong { length: usize, max: usize },

    /// A memo carries at most ten tags.
    #[error("a memo can have at most {max} tags, got {count}")]
    TooManyTags { count: usize, max: usize },

    /// Tag statistics require a non-blank tag name.
    #[error("tag name must not be blank")]
    BlankTag,

    /// Tag usage counts come from the repository and must be non-negative.
    #[error("tag count must not be negative, got {count}")]
    NegativeTagCount { count: i64 },

    /// Dashboard counts come from the repository and must be non-negative.
    #[error("dashboard statistic {field} must not be negative, got {value}")]
    NegativeStatistic { field: &'static str, value: i64 },

    /// Tag filtering needs at least one tag.
    #[error("specify at least one tag")]
    EmptyTagFilter,

    /// Keyword search needs a non-blank keyword.
    #[error("enter a search keyword")]
    BlankKeyword,
}
