//! Watchlist entry entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::id::{UserId, WatchlistItemId};
use crate::domain::ticker_code::TickerCode;

/// Raw field bag for trusted rehydration and adapter handoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItemSnapshot {
    pub id: String,
    pub user_id: String,
    pub ticker_code: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A user's declared interest in a ticker, with an optional note.
///
/// Identity is the id; the (user, ticker) pair is kept unique by the
/// add-to-watchlist use case. `created_at` is immutable and the note is the
/// only mutable field.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistItem {
    id: WatchlistItemId,
    user_id: UserId,
    ticker_code: TickerCode,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl WatchlistItem {
    /// Validate and create a fresh watchlist entry.
    ///
    /// An empty-string note is normalized to `None`.
    pub fn create(
        id: WatchlistItemId,
        user_id: UserId,
        ticker_code: impl Into<String>,
        note: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            user_id,
            ticker_code: TickerCode::try_new(ticker_code)?,
            note: note.filter(|n| !n.is_empty()),
            created_at: Utc::now(),
        })
    }

    /// Rehydrate an entry from trusted storage. Skips validation.
    pub fn reconstruct(snapshot: WatchlistItemSnapshot) -> Self {
        Self {
            id: WatchlistItemId::new(snapshot.id),
            user_id: UserId::new(snapshot.user_id),
            ticker_code: TickerCode::reconstruct(snapshot.ticker_code),
            note: snapshot.note,
            created_at: snapshot.created_at,
        }
    }

    pub fn id(&self) -> &WatchlistItemId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn ticker_code(&self) -> &TickerCode {
        &self.ticker_code
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Strict owner check.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn update_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    /// Raw field bag for adapters.
    pub fn snapshot(&self) -> WatchlistItemSnapshot {
        WatchlistItemSnapshot {
            id: self.id.as_str().to_string(),
            user_id: self.user_id.as_str().to_string(),
            ticker_code: self.ticker_code.as_str().to_string(),
            note: self.note.clone(),
            created_at: self.created_at,
        }
    }
}
