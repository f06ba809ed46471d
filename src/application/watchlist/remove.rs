//! Remove a ticker from the caller's watchlist.

use std::sync::Arc;

use tracing::info;

use crate::domain::UserId;
use crate::error::{NotFoundError, PermissionError, Result};
use crate::port::WatchlistRepository;

#[derive(Debug, Clone)]
pub struct RemoveFromWatchlistInput {
    pub user_id: UserId,
    pub ticker_code: String,
}

/// Load the (user, ticker) entry, check ownership, then delete. The delete
/// never runs before both checks pass.
pub struct RemoveFromWatchlist {
    watchlist: Arc<dyn WatchlistRepository>,
}

impl RemoveFromWatchlist {
    pub fn new(watchlist: Arc<dyn WatchlistRepository>) -> Self {
        Self { watchlist }
    }

    pub async fn execute(&self, input: RemoveFromWatchlistInput) -> Result<()> {
        let item = self
            .watchlist
            .find_by_user_and_ticker(&input.user_id, &input.ticker_code)
            .await?
            .ok_or(NotFoundError::WatchlistEntry)?;

        if !item.is_owned_by(&input.user_id) {
            return Err(PermissionError::RemoveWatchlistEntry.into());
        }

        self.watchlist.delete(item.id()).await?;

        info!(ticker = %input.ticker_code, "Removed from watchlist");
        Ok(())
    }
}
