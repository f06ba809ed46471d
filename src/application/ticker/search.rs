//! Search ticker master data.

use std::sync::Arc;

use crate::application::pagination::Pagination;
use crate::domain::Ticker;
use crate::error::Result;
use crate::port::{PageRequest, TickerRepository};

#[derive(Debug, Clone, Default)]
pub struct SearchTickersInput {
    /// Substring of the code or name. With no query, the full listing is
    /// returned ordered by code ascending.
    pub query: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct TickerPage {
    pub tickers: Vec<Ticker>,
    pub pagination: Pagination,
}

pub struct SearchTickers {
    tickers: Arc<dyn TickerRepository>,
}

impl SearchTickers {
    pub fn new(tickers: Arc<dyn TickerRepository>) -> Self {
        Self { tickers }
    }

    pub async fn execute(&self, input: SearchTickersInput) -> Result<TickerPage> {
        let request = PageRequest::new(input.page, input.limit);
        let page = self
            .tickers
            .search(input.query.as_deref(), request)
            .await?;

        Ok(TickerPage {
            tickers: page.items,
            pagination: Pagination::new(request, page.total),
        })
    }
}
