//! Dashboard statistics value object.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Roll-up counts shown on a user's dashboard.
///
/// Counts come straight from repository aggregate queries; `try_new` rejects
/// negatives as a defensive invariant against a misbehaving implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    total_memos: i64,
    total_tickers: i64,
    total_tags: i64,
    pinned_memos: i64,
}

impl DashboardStatistics {
    pub fn try_new(
        total_memos: i64,
        total_tickers: i64,
        total_tags: i64,
        pinned_memos: i64,
    ) -> Result<Self, DomainError> {
        for (field, value) in [
            ("total_memos", total_memos),
            ("total_tickers", total_tickers),
            ("total_tags", total_tags),
            ("pinned_memos", pinned_memos),
        ] {
            if value < 0 {
                return Err(DomainError::NegativeStatistic { field, value });
            }
        }
        Ok(Self {
            total_memos,
            total_tickers,
            total_tags,
            pinned_memos,
        })
    }

    pub fn total_memos(&self) -> i64 {
        self.total_memos
    }

    pub fn total_tickers(&self) -> i64 {
        self.total_tickers
    }

    pub fn total_tags(&self) -> i64 {
        self.total_tags
    }

    pub fn pinned_memos(&self) -> i64 {
        self.pinned_memos
    }

    /// True when the user has no memos at all.
    pub fn is_empty(&self) -> bool {
        self.total_memos == 0
    }

    pub fn has_pinned_memos(&self) -> bool {
        self.pinned_memos > 0
    }
}
