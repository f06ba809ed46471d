//! In-memory ticker repository.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::Ticker;
use crate::error::Result;
use crate::port::{Page, PageRequest, TickerRepository};

use super::paginate;

/// Map-backed [`TickerRepository`]. The `BTreeMap` key gives the
/// code-ascending default ordering for free.
#[derive(Default)]
pub struct InMemoryTickerRepository {
    tickers: RwLock<BTreeMap<String, Ticker>>,
    lookups: AtomicUsize,
}

impl InMemoryTickerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, ticker: Ticker) {
        self.tickers
            .write()
            .insert(ticker.code().as_str().to_string(), ticker);
    }

    /// How many times `find_by_code` has been called. Lets tests assert that
    /// batch resolution deduplicates.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub(crate) fn get(&self, code: &str) -> Option<Ticker> {
        self.tickers.read().get(code).cloned()
    }
}

#[async_trait]
impl TickerRepository for InMemoryTickerRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Ticker>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(code))
    }

    async fn search(&self, query: Option<&str>, page: PageRequest) -> Result<Page<Ticker>> {
        let tickers: Vec<Ticker> = self
            .tickers
            .read()
            .values()
            .filter(|t| query.map_or(true, |q| t.matches_query(q)))
            .cloned()
            .collect();
        Ok(paginate(tickers, page))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.tickers.read().len() as i64)
    }
}
