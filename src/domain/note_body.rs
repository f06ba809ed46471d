//! Memo body value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Free-text memo content, 1 to 10,000 characters after trimming.
///
/// Lengths are counted in characters, not bytes; memo content is routinely
/// CJK text. Same two-tier construction as
/// [`TickerCode`](crate::domain::TickerCode): `try_new` validates,
/// `reconstruct` trusts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBody(String);

impl NoteBody {
    pub const MAX_CHARS: usize = 10_000;

    /// Preview length used by list views.
    pub const DEFAULT_PREVIEW_CHARS: usize = 150;

    /// Trim, validate, and create a memo body.
    pub fn try_new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyNoteBody);
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_CHARS {
            return Err(DomainError::NoteBodyTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Rehydrate a memo body from a trusted source. Skips validation.
    pub fn reconstruct(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Content length in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Truncate to at most `max_chars` characters, appending `...` when cut.
    ///
    /// Truncation is on character boundaries so multibyte content never
    /// splits mid-glyph.
    pub fn preview(&self, max_chars: usize) -> String {
        truncate_chars(&self.0, max_chars)
    }

    /// [`preview`](Self::preview) at the default list-view length.
    pub fn default_preview(&self) -> String {
        self.preview(Self::DEFAULT_PREVIEW_CHARS)
    }
}

impl fmt::Display for NoteBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Char-boundary-safe truncation with an ellipsis marker.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
