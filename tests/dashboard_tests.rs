//! Dashboard aggregation: statistics roll-up, N-best lists, tag ranking,
//! deduplicated ticker name resolution, and the empty state.

use std::sync::Arc;

use kabunote::application::{GetDashboard, GetDashboardInput};
use kabunote::domain::UserId;
use kabunote::testkit::{fixtures, InMemoryMemoRepository, InMemoryTickerRepository};

fn input(user: &str) -> GetDashboardInput {
    GetDashboardInput {
        user_id: UserId::new(user),
    }
}

#[tokio::test]
async fn aggregates_statistics_lists_and_tags() {
    let memos = Arc::new(InMemoryMemoRepository::new());
    let tickers = Arc::new(InMemoryTickerRepository::new());
    tickers.seed(fixtures::ticker("7203", "トヨタ自動車"));
    tickers.seed(fixtures::ticker("6758", "Sony Group"));

    let mut pinned = fixtures::tagged_memo("user-1", "7203", "pinned memo", &["auto", "hold"]);
    pinned.pin();
    memos.seed(pinned.clone());
    let recent = fixtures::tagged_memo("user-1", "6758", "recent memo", &["hold"]);
    memos.seed(recent.clone());
    memos.seed(fixtures::memo("user-2", "7203", "someone else's"));

    let out = GetDashboard::new(memos, tickers)
        .execute(input("user-1"))
        .await
        .unwrap();

    assert_eq!(out.statistics.total_memos(), 2);
    assert_eq!(out.statistics.total_tickers(), 2);
    assert_eq!(out.statistics.total_tags(), 2);
    assert_eq!(out.statistics.pinned_memos(), 1);
    assert!(out.statistics.has_pinned_memos());

    assert_eq!(out.pinned_memos.len(), 1);
    assert_eq!(out.pinned_memos[0].id, pinned.id().as_str());
    assert_eq!(out.pinned_memos[0].ticker_name, "トヨタ自動車");
    assert!(out.pinned_memos[0].pinned);

    // Recent list covers all memos, most recently updated first.
    assert_eq!(out.recent_memos.len(), 2);
    assert_eq!(out.recent_memos[0].id, recent.id().as_str());
    assert_eq!(out.recent_memos[0].ticker_name, "Sony Group");

    // "hold" is used twice, "auto" once.
    let tags: Vec<(&str, i64)> = out
        .top_tags
        .iter()
        .map(|t| (t.tag(), t.count()))
        .collect();
    assert_eq!(tags, [("hold", 2), ("auto", 1)]);
}

#[tokio::test]
async fn tag_ranking_breaks_count_ties_by_name() {
    let memos = Arc::new(InMemoryMemoRepository::new());
    let tickers = Arc::new(InMemoryTickerRepository::new());
    memos.seed(fixtures::tagged_memo("user-1", "7203", "memo", &["zeta", "alpha"]));

    let out = GetDashboard::new(memos, tickers)
        .execute(input("user-1"))
        .await
        .unwrap();

    let tags: Vec<&str> = out.top_tags.iter().map(|t| t.tag()).collect();
    assert_eq!(tags, ["alpha", "zeta"]);
}

#[tokio::test]
async fn resolves_ticker_names_once_per_distinct_code() {
    let memos = Arc::new(InMemoryMemoRepository::new());
    let tickers = Arc::new(InMemoryTickerRepository::new());
    tickers.seed(fixtures::ticker("7203", "トヨタ自動車"));

    // Three memos, all on the same ticker; one pinned so the code appears in
    // both the pinned and the recent set.
    let mut pinned = fixtures::memo("user-1", "7203", "pinned");
    pinned.pin();
    memos.seed(pinned);
    memos.seed(fixtures::memo("user-1", "7203", "a"));
    memos.seed(fixtures::memo("user-1", "7203", "b"));

    GetDashboard::new(memos, tickers.clone())
        .execute(input("user-1"))
        .await
        .unwrap();

    assert_eq!(tickers.lookup_count(), 1);
}

#[tokio::test]
async fn unresolvable_ticker_falls_back_to_the_code() {
    let memos = Arc::new(InMemoryMemoRepository::new());
    let tickers = Arc::new(InMemoryTickerRepository::new());
    memos.seed(fixtures::memo("user-1", "4444", "orphaned ticker"));

    let out = GetDashboard::new(memos, tickers)
        .execute(input("user-1"))
        .await
        .unwrap();

    assert_eq!(out.recent_memos[0].ticker_name, "4444");
    assert_eq!(out.recent_memos[0].ticker_code, "4444");
}

#[tokio::test]
async fn summary_content_is_cut_to_one_hundred_chars() {
    let memos = Arc::new(InMemoryMemoRepository::new());
    let tickers = Arc::new(InMemoryTickerRepository::new());
    memos.seed(fixtures::memo("user-1", "7203", &"あ".repeat(150)));

    let out = GetDashboard::new(memos, tickers)
        .execute(input("user-1"))
        .await
        .unwrap();

    let content = &out.recent_memos[0].content;
    assert_eq!(content.chars().count(), 103); // 100 + "..."
    assert!(content.ends_with("..."));
}

#[tokio::test]
async fn pinned_and_recent_lists_cap_at_five() {
    let memos = Arc::new(InMemoryMemoRepository::new());
    let tickers = Arc::new(InMemoryTickerRepository::new());
    for i in 0..7 {
        let mut memo = fixtures::memo("user-1", "7203", &format!("memo {i}"));
        memo.pin();
        memos.seed(memo);
    }

    let out = GetDashboard::new(memos, tickers)
        .execute(input("user-1"))
        .await
        .unwrap();

    assert_eq!(out.statistics.pinned_memos(), 7);
    assert_eq!(out.pinned_memos.len(), 5);
    assert_eq!(out.recent_memos.len(), 5);
}

#[tokio::test]
async fn empty_user_gets_zeroed_statistics_not_an_error() {
    let memos = Arc::new(InMemoryMemoRepository::new());
    let tickers = Arc::new(InMemoryTickerRepository::new());

    let out = GetDashboard::new(memos, tickers.clone())
        .execute(input("user-without-memos"))
        .await
        .unwrap();

    assert!(out.statistics.is_empty());
    assert!(!out.statistics.has_pinned_memos());
    assert!(out.pinned_memos.is_empty());
    assert!(out.recent_memos.is_empty());
    assert!(out.top_tags.is_empty());
    // Nothing to resolve either.
    assert_eq!(tickers.lookup_count(), 0);
}
