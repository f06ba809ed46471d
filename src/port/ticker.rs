//! Ticker reference-data port.

use async_trait::async_trait;

use crate::domain::Ticker;
use crate::error::Result;
use crate::port::pagination::{Page, PageRequest};

/// Read access to ticker master data, implemented by a storage adapter.
#[async_trait]
pub trait TickerRepository: Send + Sync {
    /// Get a ticker by its 4-digit code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Ticker>>;

    /// One page of tickers matching `query` as a substring of the code or
    /// the name. With no query, every ticker, ordered by code ascending.
    async fn search(&self, query: Option<&str>, page: PageRequest) -> Result<Page<Ticker>>;

    /// Total number of tickers.
    async fn count(&self) -> Result<i64>;
}
