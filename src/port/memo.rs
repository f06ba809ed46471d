//! Memo persistence port.

use async_trait::async_trait;

use crate::domain::{Memo, MemoId, TickerCode, UserId};
use crate::error::Result;
use crate::port::pagination::{Page, PageRequest};

/// Storage operations for memos, implemented by a storage adapter.
///
/// # Implementation notes
///
/// - Implementations must be thread-safe (`Send + Sync`).
/// - `save` has upsert semantics: insert when the id is new, otherwise
///   replace every mutable field.
/// - `find_by_user` orders by pinned (descending) then `updated_at`
///   (descending). The application layer relies on that ordering.
/// - Keyword search matches a substring of the title, the content, or the
///   associated ticker's name or code.
/// - `tag_statistics` returns `(tag, count)` pairs ranked by descending
///   count; implementations should break ties on the tag name so output is
///   deterministic.
#[async_trait]
pub trait MemoRepository: Send + Sync {
    /// Get a memo by id.
    async fn find_by_id(&self, id: &MemoId) -> Result<Option<Memo>>;

    /// One page of a user's memos, pinned first then most recently updated.
    async fn find_by_user(&self, user_id: &UserId, page: PageRequest) -> Result<Page<Memo>>;

    /// One page of the public memos attached to a ticker, most recent first.
    async fn find_public_by_ticker(
        &self,
        code: &TickerCode,
        page: PageRequest,
    ) -> Result<Page<Memo>>;

    /// Insert or replace a memo.
    async fn save(&self, memo: &Memo) -> Result<()>;

    /// Delete a memo by id.
    async fn delete(&self, id: &MemoId) -> Result<()>;

    /// Total number of memos a user owns.
    async fn count_by_user(&self, user_id: &UserId) -> Result<i64>;

    /// One page of a user's memos carrying **all** of `tags` (AND semantics,
    /// exact case-sensitive match per tag).
    async fn find_by_user_and_tags(
        &self,
        user_id: &UserId,
        tags: &[String],
        page: PageRequest,
    ) -> Result<Page<Memo>>;

    /// One page of a user's memos matching `keyword`.
    async fn search_by_keyword(
        &self,
        user_id: &UserId,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Memo>>;

    /// Up to `limit` pinned memos, most recently updated first.
    async fn find_pinned_by_user(&self, user_id: &UserId, limit: usize) -> Result<Vec<Memo>>;

    /// Up to `limit` memos, most recently updated first.
    async fn find_recent_by_user(&self, user_id: &UserId, limit: usize) -> Result<Vec<Memo>>;

    /// Up to `limit` `(tag, count)` pairs, most used first.
    async fn tag_statistics(&self, user_id: &UserId, limit: usize) -> Result<Vec<(String, i64)>>;

    /// Number of distinct tickers the user has memos on.
    async fn count_unique_tickers_by_user(&self, user_id: &UserId) -> Result<i64>;

    /// Number of distinct tags across the user's memos.
    async fn count_unique_tags_by_user(&self, user_id: &UserId) -> Result<i64>;

    /// Number of pinned memos the user owns.
    async fn count_pinned_by_user(&self, user_id: &UserId) -> Result<i64>;
}
