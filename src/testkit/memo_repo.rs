//! In-memory memo repository.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Memo, MemoId, TickerCode, UserId};
use crate::error::Result;
use crate::port::{MemoRepository, Page, PageRequest};

use super::paginate;
use super::ticker_repo::InMemoryTickerRepository;

/// Map-backed [`MemoRepository`] with the documented orderings.
///
/// Attach a ticker repository with [`with_tickers`](Self::with_tickers) when
/// keyword search should also match ticker names, mirroring the join the
/// real adapter performs.
#[derive(Default)]
pub struct InMemoryMemoRepository {
    memos: RwLock<HashMap<String, Memo>>,
    tickers: Option<Arc<InMemoryTickerRepository>>,
    save_calls: AtomicUsize,
}

impl InMemoryMemoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tickers(tickers: Arc<InMemoryTickerRepository>) -> Self {
        Self {
            tickers: Some(tickers),
            ..Self::default()
        }
    }

    /// Seed a memo without counting it as a `save` call.
    pub fn seed(&self, memo: Memo) {
        self.memos
            .write()
            .insert(memo.id().as_str().to_string(), memo);
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    fn of_user(&self, user_id: &UserId) -> Vec<Memo> {
        self.memos
            .read()
            .values()
            .filter(|m| m.is_owned_by(user_id))
            .cloned()
            .collect()
    }

    fn by_recency(mut memos: Vec<Memo>) -> Vec<Memo> {
        memos.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
        memos
    }

    fn ticker_name(&self, code: &str) -> Option<String> {
        self.tickers
            .as_ref()
            .and_then(|t| t.get(code))
            .map(|t| t.name().to_string())
    }
}

#[async_trait]
impl MemoRepository for InMemoryMemoRepository {
    async fn find_by_id(&self, id: &MemoId) -> Result<Option<Memo>> {
        Ok(self.memos.read().get(id.as_str()).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId, page: PageRequest) -> Result<Page<Memo>> {
        let mut memos = self.of_user(user_id);
        memos.sort_by(|a, b| {
            b.is_pinned()
                .cmp(&a.is_pinned())
                .then(b.updated_at().cmp(&a.updated_at()))
        });
        Ok(paginate(memos, page))
    }

    async fn find_public_by_ticker(
        &self,
        code: &TickerCode,
        page: PageRequest,
    ) -> Result<Page<Memo>> {
        let memos: Vec<Memo> = self
            .memos
            .read()
            .values()
            .filter(|m| m.visibility().is_public() && m.ticker_code() == code)
            .cloned()
            .collect();
        Ok(paginate(Self::by_recency(memos), page))
    }

    async fn save(&self, memo: &Memo) -> Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.memos
            .write()
            .insert(memo.id().as_str().to_string(), memo.clone());
        Ok(())
    }

    async fn delete(&self, id: &MemoId) -> Result<()> {
        self.memos.write().remove(id.as_str());
        Ok(())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<i64> {
        Ok(self.of_user(user_id).len() as i64)
    }

    async fn find_by_user_and_tags(
        &self,
        user_id: &UserId,
        tags: &[String],
        page: PageRequest,
    ) -> Result<Page<Memo>> {
        let memos: Vec<Memo> = self
            .of_user(user_id)
            .into_iter()
            .filter(|m| tags.iter().all(|tag| m.tags().contains(tag)))
            .collect();
        Ok(paginate(Self::by_recency(memos), page))
    }

    async fn search_by_keyword(
        &self,
        user_id: &UserId,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Memo>> {
        let memos: Vec<Memo> = self
            .of_user(user_id)
            .into_iter()
            .filter(|m| {
                m.title().is_some_and(|t| t.contains(keyword))
                    || m.body().as_str().contains(keyword)
                    || m.ticker_code().as_str().contains(keyword)
                    || self
                        .ticker_name(m.ticker_code().as_str())
                        .is_some_and(|name| name.contains(keyword))
            })
            .collect();
        Ok(paginate(Self::by_recency(memos), page))
    }

    async fn find_pinned_by_user(&self, user_id: &UserId, limit: usize) -> Result<Vec<Memo>> {
        let pinned = self
            .of_user(user_id)
            .into_iter()
            .filter(Memo::is_pinned)
            .collect();
        let mut pinned = Self::by_recency(pinned);
        pinned.truncate(limit);
        Ok(pinned)
    }

    async fn find_recent_by_user(&self, user_id: &UserId, limit: usize) -> Result<Vec<Memo>> {
        let mut memos = Self::by_recency(self.of_user(user_id));
        memos.truncate(limit);
        Ok(memos)
    }

    async fn tag_statistics(&self, user_id: &UserId, limit: usize) -> Result<Vec<(String, i64)>> {
        // BTreeMap gives the tag-name tie break for free.
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for memo in self.of_user(user_id) {
            for tag in memo.tags() {
                *counts.entry(tag.clone()).or_default() += 1;
            }
        }
        let mut stats: Vec<(String, i64)> = counts.into_iter().collect();
        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        stats.truncate(limit);
        Ok(stats)
    }

    async fn count_unique_tickers_by_user(&self, user_id: &UserId) -> Result<i64> {
        let codes: HashSet<String> = self
            .of_user(user_id)
            .iter()
            .map(|m| m.ticker_code().as_str().to_string())
            .collect();
        Ok(codes.len() as i64)
    }

    async fn count_unique_tags_by_user(&self, user_id: &UserId) -> Result<i64> {
        let tags: HashSet<String> = self
            .of_user(user_id)
            .iter()
            .flat_map(|m| m.tags().iter().cloned())
            .collect();
        Ok(tags.len() as i64)
    }

    async fn count_pinned_by_user(&self, user_id: &UserId) -> Result<i64> {
        Ok(self
            .of_user(user_id)
            .iter()
            .filter(|m| m.is_pinned())
            .count() as i64)
    }
}
