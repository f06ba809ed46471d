//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - In-memory repository fakes implementing the [`port`](crate::port)
//!   traits with the documented orderings: [`InMemoryMemoRepository`],
//!   [`InMemoryTickerRepository`], [`InMemoryWatchlistRepository`].
//! - [`fixtures`] — builders for memos, tickers, and watchlist entries.

pub mod fixtures;

mod memo_repo;
mod ticker_repo;
mod watchlist_repo;

pub use memo_repo::InMemoryMemoRepository;
pub use ticker_repo::InMemoryTickerRepository;
pub use watchlist_repo::InMemoryWatchlistRepository;

use crate::port::{Page, PageRequest};

/// Slice `items` to one page, keeping the pre-slice total.
pub(crate) fn paginate<T>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    Page { items, total }
}
