//! Listing, tag filtering, and keyword search over memos, including the
//! pagination roll-ups.

use std::sync::Arc;

use kabunote::application::memo::{
    FilterMemosByTags, FilterMemosByTagsInput, ListUserMemos, ListUserMemosInput, SearchMemos,
    SearchMemosInput,
};
use kabunote::domain::UserId;
use kabunote::error::ErrorKind;
use kabunote::testkit::{fixtures, InMemoryMemoRepository, InMemoryTickerRepository};

#[tokio::test]
async fn list_orders_pinned_first_then_recency() {
    let repo = Arc::new(InMemoryMemoRepository::new());
    let old_pinned = {
        let mut m = fixtures::memo("user-1", "7203", "pinned early");
        m.pin();
        m
    };
    let recent = fixtures::memo("user-1", "6758", "recent unpinned");
    repo.seed(old_pinned.clone());
    repo.seed(recent.clone());
    repo.seed(fixtures::memo("user-2", "7203", "someone else's"));

    let page = ListUserMemos::new(repo)
        .execute(ListUserMemosInput {
            user_id: UserId::new("user-1"),
            page: None,
            limit: None,
        })
        .await
        .unwrap();

    // The pinned memo leads even though the other was updated later.
    assert_eq!(page.memos.len(), 2);
    assert_eq!(page.memos[0].id(), old_pinned.id());
    assert_eq!(page.memos[1].id(), recent.id());
    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.pagination.total_pages, 1);
}

#[tokio::test]
async fn list_pagination_rolls_up_total_pages() {
    let repo = Arc::new(InMemoryMemoRepository::new());
    for i in 0..45 {
        repo.seed(fixtures::memo("user-1", "7203", &format!("memo {i}")));
    }

    let page = ListUserMemos::new(repo.clone())
        .execute(ListUserMemosInput {
            user_id: UserId::new("user-1"),
            page: Some(5),
            limit: Some(10),
        })
        .await
        .unwrap();

    assert_eq!(page.memos.len(), 5);
    assert_eq!(page.pagination.page, 5);
    assert_eq!(page.pagination.total, 45);
    assert_eq!(page.pagination.total_pages, 5);

    // Empty result set: zero pages, not one.
    let empty = ListUserMemos::new(repo)
        .execute(ListUserMemosInput {
            user_id: UserId::new("nobody"),
            page: None,
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(empty.pagination.total_pages, 0);
}

#[tokio::test]
async fn tag_filter_requires_every_listed_tag() {
    let repo = Arc::new(InMemoryMemoRepository::new());
    let both = fixtures::tagged_memo("user-1", "7203", "has both", &["A", "B"]);
    repo.seed(both.clone());
    repo.seed(fixtures::tagged_memo("user-1", "6758", "only A", &["A"]));
    repo.seed(fixtures::tagged_memo("user-1", "9984", "superset", &["A", "B", "C"]));

    let page = FilterMemosByTags::new(repo)
        .execute(FilterMemosByTagsInput {
            user_id: UserId::new("user-1"),
            tags: vec!["A".to_string(), "B".to_string()],
            page: None,
            limit: None,
        })
        .await
        .unwrap();

    // AND semantics: the A-only memo is excluded, the superset included.
    assert_eq!(page.pagination.total, 2);
    assert!(page.memos.iter().all(|m| {
        m.tags().contains(&"A".to_string()) && m.tags().contains(&"B".to_string())
    }));
}

#[tokio::test]
async fn tag_filter_is_case_sensitive() {
    let repo = Arc::new(InMemoryMemoRepository::new());
    repo.seed(fixtures::tagged_memo("user-1", "7203", "lowercase", &["growth"]));

    let page = FilterMemosByTags::new(repo)
        .execute(FilterMemosByTagsInput {
            user_id: UserId::new("user-1"),
            tags: vec!["Growth".to_string()],
            page: None,
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn tag_filter_rejects_an_empty_tag_list() {
    let repo = Arc::new(InMemoryMemoRepository::new());
    let err = FilterMemosByTags::new(repo)
        .execute(FilterMemosByTagsInput {
            user_id: UserId::new("user-1"),
            tags: vec![],
            page: None,
            limit: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "specify at least one tag");
}

#[tokio::test]
async fn keyword_search_spans_title_content_and_ticker() {
    let tickers = Arc::new(InMemoryTickerRepository::new());
    tickers.seed(fixtures::ticker("7203", "トヨタ自動車"));
    let repo = Arc::new(InMemoryMemoRepository::with_tickers(tickers));

    let mut titled = fixtures::memo("user-1", "6758", "body text");
    titled.update_title(Some("決算メモ".to_string()));
    repo.seed(titled);
    repo.seed(fixtures::memo("user-1", "6758", "内容に決算の話"));
    repo.seed(fixtures::memo("user-1", "7203", "no keyword here"));
    let search = SearchMemos::new(repo);

    // Title and content matches.
    let page = search
        .execute(SearchMemosInput {
            user_id: UserId::new("user-1"),
            keyword: "決算".to_string(),
            page: None,
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 2);

    // Ticker name match pulls in the memo with no keyword in its text.
    let page = search
        .execute(SearchMemosInput {
            user_id: UserId::new("user-1"),
            keyword: "トヨタ".to_string(),
            page: None,
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 1);

    // Ticker code match.
    let page = search
        .execute(SearchMemosInput {
            user_id: UserId::new("user-1"),
            keyword: "7203".to_string(),
            page: None,
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 1);
}

#[tokio::test]
async fn public_memos_by_ticker_exclude_private_ones() {
    use kabunote::domain::TickerCode;
    use kabunote::port::{MemoRepository, PageRequest};

    let repo = Arc::new(InMemoryMemoRepository::new());
    let mut public = fixtures::memo("user-1", "7203", "public take");
    public.publish();
    repo.seed(public.clone());
    repo.seed(fixtures::memo("user-2", "7203", "private take"));
    repo.seed({
        let mut other = fixtures::memo("user-3", "6758", "other ticker");
        other.publish();
        other
    });

    let page = repo
        .find_public_by_ticker(&TickerCode::try_new("7203").unwrap(), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id(), public.id());
}

#[tokio::test]
async fn keyword_search_trims_and_rejects_blank_keywords() {
    let repo = Arc::new(InMemoryMemoRepository::new());
    repo.seed(fixtures::memo("user-1", "7203", "padded match"));
    let search = SearchMemos::new(repo);

    let page = search
        .execute(SearchMemosInput {
            user_id: UserId::new("user-1"),
            keyword: "  padded  ".to_string(),
            page: None,
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 1);

    let err = search
        .execute(SearchMemosInput {
            user_id: UserId::new("user-1"),
            keyword: "   ".to_string(),
            page: None,
            limit: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "enter a search keyword");
}
