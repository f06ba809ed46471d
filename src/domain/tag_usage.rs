//! Tag usage statistics value object.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A tag and how many memos carry it. Reporting-only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagUsage {
    tag: String,
    count: i64,
}

impl TagUsage {
    /// Validate and create a tag usage record.
    ///
    /// Counts arrive as `i64` from SQL-shaped repositories, so a negative
    /// value is possible in the type and rejected here.
    pub fn try_new(tag: impl AsRef<str>, count: i64) -> Result<Self, DomainError> {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            return Err(DomainError::BlankTag);
        }
        if count < 0 {
            return Err(DomainError::NegativeTagCount { count });
        }
        Ok(Self {
            tag: tag.to_string(),
            count,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_tag_name() {
        let usage = TagUsage::try_new("  growth  ", 3).unwrap();
        assert_eq!(usage.tag(), "growth");
        assert_eq!(usage.count(), 3);
    }

    #[test]
    fn zero_count_is_allowed() {
        assert!(TagUsage::try_new("dividend", 0).is_ok());
    }

    #[test]
    fn rejects_blank_tag_and_negative_count() {
        assert_eq!(TagUsage::try_new("   ", 1), Err(DomainError::BlankTag));
        assert_eq!(
            TagUsage::try_new("growth", -1),
            Err(DomainError::NegativeTagCount { count: -1 })
        );
    }
}
