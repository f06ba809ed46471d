//! Add a ticker to the caller's watchlist.

use std::sync::Arc;

use tracing::info;

use crate::domain::{UserId, WatchlistItem, WatchlistItemId};
use crate::error::{ConflictError, NotFoundError, Result};
use crate::port::{TickerRepository, WatchlistRepository};

#[derive(Debug, Clone)]
pub struct AddToWatchlistInput {
    pub user_id: UserId,
    pub ticker_code: String,
    pub note: Option<String>,
}

/// Verify the ticker exists, verify the pair isn't already watched, then
/// create and persist the entry. Duplicate watches conflict without a
/// second save.
pub struct AddToWatchlist {
    watchlist: Arc<dyn WatchlistRepository>,
    tickers: Arc<dyn TickerRepository>,
}

impl AddToWatchlist {
    pub fn new(watchlist: Arc<dyn WatchlistRepository>, tickers: Arc<dyn TickerRepository>) -> Self {
        Self { watchlist, tickers }
    }

    pub async fn execute(&self, input: AddToWatchlistInput) -> Result<WatchlistItem> {
        if self
            .tickers
            .find_by_code(&input.ticker_code)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Ticker.into());
        }

        if self
            .watchlist
            .find_by_user_and_ticker(&input.user_id, &input.ticker_code)
            .await?
            .is_some()
        {
            return Err(ConflictError::AlreadyWatching {
                code: input.ticker_code,
            }
            .into());
        }

        let item = WatchlistItem::create(
            WatchlistItemId::generate(),
            input.user_id,
            input.ticker_code,
            input.note,
        )?;

        self.watchlist.save(&item).await?;

        info!(ticker = %item.ticker_code(), "Added to watchlist");
        Ok(item)
    }
}
