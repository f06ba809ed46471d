//! Dashboard aggregation pipeline.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{truncate_chars, DashboardStatistics, Memo, TagUsage, UserId};
use crate::error::Result;
use crate::port::{MemoRepository, TickerRepository};

/// How many pinned / recent memos the dashboard shows.
const MEMO_LIST_LIMIT: usize = 5;
/// How many entries the tag ranking shows.
const TOP_TAGS_LIMIT: usize = 10;
/// Dashboard cards are denser than list views, so content is cut shorter
/// than [`NoteBody::DEFAULT_PREVIEW_CHARS`](crate::domain::NoteBody).
const SUMMARY_CONTENT_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct GetDashboardInput {
    pub user_id: UserId,
}

/// A memo shaped for a dashboard card: truncated content plus the resolved
/// ticker display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoSummary {
    pub id: String,
    pub title: Option<String>,
    pub content: String,
    pub ticker_code: String,
    pub ticker_name: String,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub pinned: bool,
}

#[derive(Debug, Clone)]
pub struct DashboardOutput {
    pub statistics: DashboardStatistics,
    pub pinned_memos: Vec<MemoSummary>,
    pub recent_memos: Vec<MemoSummary>,
    /// Ranked by descending usage, ties broken by tag name.
    pub top_tags: Vec<TagUsage>,
}

/// Aggregate everything a user's dashboard shows.
///
/// The seven repository reads are independent and idempotent, so they are
/// dispatched concurrently; a user with no memos yields zeroed statistics
/// and empty lists rather than an error.
pub struct GetDashboard {
    memos: Arc<dyn MemoRepository>,
    tickers: Arc<dyn TickerRepository>,
}

impl GetDashboard {
    pub fn new(memos: Arc<dyn MemoRepository>, tickers: Arc<dyn TickerRepository>) -> Self {
        Self { memos, tickers }
    }

    pub async fn execute(&self, input: GetDashboardInput) -> Result<DashboardOutput> {
        let user_id = &input.user_id;

        let (total_memos, total_tickers, total_tags, pinned_count, pinned, recent, tag_stats) =
            tokio::try_join!(
                self.memos.count_by_user(user_id),
                self.memos.count_unique_tickers_by_user(user_id),
                self.memos.count_unique_tags_by_user(user_id),
                self.memos.count_pinned_by_user(user_id),
                self.memos.find_pinned_by_user(user_id, MEMO_LIST_LIMIT),
                self.memos.find_recent_by_user(user_id, MEMO_LIST_LIMIT),
                self.memos.tag_statistics(user_id, TOP_TAGS_LIMIT),
            )?;

        let statistics =
            DashboardStatistics::try_new(total_memos, total_tickers, total_tags, pinned_count)?;

        let top_tags = tag_stats
            .into_iter()
            .map(|(tag, count)| TagUsage::try_new(tag, count))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // One deduplicated name lookup across both memo lists.
        let names = self.resolve_ticker_names(pinned.iter().chain(recent.iter())).await?;

        debug!(
            user_id = %user_id,
            total_memos,
            resolved_tickers = names.len(),
            "Dashboard aggregated"
        );

        Ok(DashboardOutput {
            pinned_memos: summarize(&pinned, &names),
            recent_memos: summarize(&recent, &names),
            statistics,
            top_tags,
        })
    }

    /// Resolve each distinct ticker code to its display name in one batch of
    /// concurrent lookups.
    async fn resolve_ticker_names<'a>(
        &self,
        memos: impl Iterator<Item = &'a Memo>,
    ) -> Result<HashMap<String, String>> {
        let codes: BTreeSet<&str> = memos.map(|m| m.ticker_code().as_str()).collect();

        let lookups = codes.into_iter().map(|code| async move {
            let ticker = self.tickers.find_by_code(code).await?;
            Ok::<_, crate::Error>((code, ticker))
        });

        let mut names = HashMap::new();
        for (code, ticker) in try_join_all(lookups).await? {
            if let Some(ticker) = ticker {
                names.insert(code.to_string(), ticker.name().to_string());
            }
        }
        Ok(names)
    }
}

fn summarize(memos: &[Memo], names: &HashMap<String, String>) -> Vec<MemoSummary> {
    memos
        .iter()
        .map(|memo| {
            let code = memo.ticker_code().as_str();
            MemoSummary {
                id: memo.id().as_str().to_string(),
                title: memo.title().map(str::to_string),
                content: truncate_chars(memo.body().as_str(), SUMMARY_CONTENT_CHARS),
                ticker_code: code.to_string(),
                // Unresolvable codes fall back to displaying the code itself.
                ticker_name: names.get(code).cloned().unwrap_or_else(|| code.to_string()),
                updated_at: memo.updated_at(),
                tags: memo.tags().to_vec(),
                pinned: memo.is_pinned(),
            }
        })
        .collect()
}
