//! Check whether the caller watches a ticker.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::error::Result;
use crate::port::WatchlistRepository;

#[derive(Debug, Clone)]
pub struct CheckWatchlistInput {
    pub user_id: UserId,
    pub ticker_code: String,
}

/// `note` is `None` whenever `is_watching` is false, regardless of any stale
/// stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckWatchlistOutput {
    pub is_watching: bool,
    pub note: Option<String>,
}

pub struct CheckWatchlist {
    watchlist: Arc<dyn WatchlistRepository>,
}

impl CheckWatchlist {
    pub fn new(watchlist: Arc<dyn WatchlistRepository>) -> Self {
        Self { watchlist }
    }

    pub async fn execute(&self, input: CheckWatchlistInput) -> Result<CheckWatchlistOutput> {
        let item = self
            .watchlist
            .find_by_user_and_ticker(&input.user_id, &input.ticker_code)
            .await?;

        Ok(match item {
            Some(item) => CheckWatchlistOutput {
                is_watching: true,
                note: item.note().map(str::to_string),
            },
            None => CheckWatchlistOutput {
                is_watching: false,
                note: None,
            },
        })
    }
}
