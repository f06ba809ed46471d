//! Fetch a single ticker.

use std::sync::Arc;

use crate::domain::Ticker;
use crate::error::{NotFoundError, Result};
use crate::port::TickerRepository;

#[derive(Debug, Clone)]
pub struct GetTickerInput {
    pub code: String,
}

pub struct GetTicker {
    tickers: Arc<dyn TickerRepository>,
}

impl GetTicker {
    pub fn new(tickers: Arc<dyn TickerRepository>) -> Self {
        Self { tickers }
    }

    pub async fn execute(&self, input: GetTickerInput) -> Result<Ticker> {
        self.tickers
            .find_by_code(&input.code)
            .await?
            .ok_or_else(|| NotFoundError::Ticker.into())
    }
}
