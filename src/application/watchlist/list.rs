//! List the caller's watchlist.

use std::sync::Arc;

use crate::domain::{UserId, WatchlistItem};
use crate::error::Result;
use crate::port::WatchlistRepository;

#[derive(Debug, Clone)]
pub struct ListWatchlistInput {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct WatchlistOutput {
    /// Most recently added first (repository convention).
    pub items: Vec<WatchlistItem>,
    pub total: i64,
}

pub struct ListWatchlist {
    watchlist: Arc<dyn WatchlistRepository>,
}

impl ListWatchlist {
    pub fn new(watchlist: Arc<dyn WatchlistRepository>) -> Self {
        Self { watchlist }
    }

    pub async fn execute(&self, input: ListWatchlistInput) -> Result<WatchlistOutput> {
        // Independent reads, dispatched together.
        let (items, total) = tokio::try_join!(
            self.watchlist.find_by_user(&input.user_id),
            self.watchlist.count_by_user(&input.user_id),
        )?;

        Ok(WatchlistOutput { items, total })
    }
}
