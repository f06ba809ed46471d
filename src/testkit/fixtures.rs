//! Builders for domain fixtures used across tests.
//!
//! Concise factories so tests focus on assertions rather than construction
//! boilerplate.

use crate::domain::{
    Memo, MemoId, NewMemo, Ticker, TickerSnapshot, UserId, WatchlistItem, WatchlistItemId,
};

/// A private, untagged memo for `user` on `ticker_code`.
pub fn memo(user: &str, ticker_code: &str, content: &str) -> Memo {
    Memo::create(NewMemo {
        id: MemoId::generate(),
        user_id: UserId::new(user),
        ticker_code: ticker_code.to_string(),
        content: content.to_string(),
        title: None,
        tags: vec![],
        visibility: None,
    })
    .expect("fixture memo must be valid")
}

/// Like [`memo`], with tags.
pub fn tagged_memo(user: &str, ticker_code: &str, content: &str, tags: &[&str]) -> Memo {
    let mut memo = memo(user, ticker_code, content);
    memo.update_tags(tags.iter().map(|t| t.to_string()).collect())
        .expect("fixture tags must fit the cap");
    memo
}

/// A ticker with only code and name populated.
pub fn ticker(code: &str, name: &str) -> Ticker {
    Ticker::reconstruct(TickerSnapshot {
        code: code.to_string(),
        name: name.to_string(),
        market_segment: None,
        industry33_code: None,
        industry33_name: None,
        industry17_code: None,
        industry17_name: None,
        scale_code: None,
        scale_name: None,
    })
}

/// A watchlist entry for `user` on `ticker_code`.
pub fn watch(user: &str, ticker_code: &str, note: Option<&str>) -> WatchlistItem {
    WatchlistItem::create(
        WatchlistItemId::generate(),
        UserId::new(user),
        ticker_code,
        note.map(str::to_string),
    )
    .expect("fixture watch must be valid")
}
