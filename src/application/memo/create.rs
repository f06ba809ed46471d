//! Create a memo.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Memo, MemoId, NewMemo, UserId, Visibility};
use crate::error::Result;
use crate::port::MemoRepository;

#[derive(Debug, Clone)]
pub struct CreateMemoInput {
    pub user_id: UserId,
    pub ticker_code: String,
    pub content: String,
    pub title: Option<String>,
    pub tags: Vec<String>,
    /// Defaults to private when absent.
    pub visibility: Option<Visibility>,
}

/// Build a memo from untrusted input and persist it.
///
/// Validation happens in [`Memo::create`]; a validation failure means no
/// repository call is made. Whether the ticker actually exists is the
/// caller's concern, checked at the transport boundary before invoking this
/// use case.
pub struct CreateMemo {
    memos: Arc<dyn MemoRepository>,
}

impl CreateMemo {
    pub fn new(memos: Arc<dyn MemoRepository>) -> Self {
        Self { memos }
    }

    pub async fn execute(&self, input: CreateMemoInput) -> Result<Memo> {
        let memo = Memo::create(NewMemo {
            id: MemoId::generate(),
            user_id: input.user_id,
            ticker_code: input.ticker_code,
            content: input.content,
            title: input.title,
            tags: input.tags,
            visibility: input.visibility,
        })?;

        self.memos.save(&memo).await?;

        info!(
            memo_id = %memo.id(),
            ticker = %memo.ticker_code(),
            visibility = %memo.visibility(),
            "Memo created"
        );
        Ok(memo)
    }
}
