//! In-memory watchlist repository.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{UserId, WatchlistItem, WatchlistItemId};
use crate::error::Result;
use crate::port::WatchlistRepository;

/// Map-backed [`WatchlistRepository`], most recently added first.
#[derive(Default)]
pub struct InMemoryWatchlistRepository {
    items: RwLock<HashMap<String, WatchlistItem>>,
    save_calls: AtomicUsize,
}

impl InMemoryWatchlistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry without counting it as a `save` call.
    pub fn seed(&self, item: WatchlistItem) {
        self.items
            .write()
            .insert(item.id().as_str().to_string(), item);
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WatchlistRepository for InMemoryWatchlistRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WatchlistItem>> {
        let mut items: Vec<WatchlistItem> = self
            .items
            .read()
            .values()
            .filter(|i| i.is_owned_by(user_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(items)
    }

    async fn find_by_user_and_ticker(
        &self,
        user_id: &UserId,
        ticker_code: &str,
    ) -> Result<Option<WatchlistItem>> {
        Ok(self
            .items
            .read()
            .values()
            .find(|i| i.is_owned_by(user_id) && i.ticker_code().as_str() == ticker_code)
            .cloned())
    }

    async fn save(&self, item: &WatchlistItem) -> Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.items
            .write()
            .insert(item.id().as_str().to_string(), item.clone());
        Ok(())
    }

    async fn delete(&self, id: &WatchlistItemId) -> Result<()> {
        self.items.write().remove(id.as_str());
        Ok(())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<i64> {
        Ok(self
            .items
            .read()
            .values()
            .filter(|i| i.is_owned_by(user_id))
            .count() as i64)
    }
}
