//! Watchlist persistence port.

use async_trait::async_trait;

use crate::domain::{UserId, WatchlistItem, WatchlistItemId};
use crate::error::Result;

/// Storage operations for watchlist entries, implemented by a storage
/// adapter.
///
/// `save` has upsert semantics. `find_by_user` returns entries most recently
/// added first.
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// All of a user's watchlist entries, most recently added first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WatchlistItem>>;

    /// The entry for a (user, ticker) pair, if any.
    async fn find_by_user_and_ticker(
        &self,
        user_id: &UserId,
        ticker_code: &str,
    ) -> Result<Option<WatchlistItem>>;

    /// Insert or replace an entry.
    async fn save(&self, item: &WatchlistItem) -> Result<()>;

    /// Delete an entry by id.
    async fn delete(&self, id: &WatchlistItemId) -> Result<()>;

    /// Number of entries a user has.
    async fn count_by_user(&self, user_id: &UserId) -> Result<i64>;
}
