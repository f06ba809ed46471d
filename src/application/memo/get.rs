//! Fetch a single memo with visibility enforcement.

use std::sync::Arc;

use crate::domain::{Memo, MemoId, UserId};
use crate::error::{NotFoundError, PermissionError, Result};
use crate::port::MemoRepository;

#[derive(Debug, Clone)]
pub struct GetMemoInput {
    pub memo_id: MemoId,
    /// The viewer. `None` means an anonymous request, which can only see
    /// public memos.
    pub viewer: Option<UserId>,
}

/// Load a memo and check the viewer against its visibility.
///
/// Missing memos report not-found before any permission decision, so a
/// caller cannot probe for the existence of private memos they cannot see.
pub struct GetMemo {
    memos: Arc<dyn MemoRepository>,
}

impl GetMemo {
    pub fn new(memos: Arc<dyn MemoRepository>) -> Self {
        Self { memos }
    }

    pub async fn execute(&self, input: GetMemoInput) -> Result<Memo> {
        let memo = self
            .memos
            .find_by_id(&input.memo_id)
            .await?
            .ok_or(NotFoundError::Memo)?;

        if !memo.can_be_viewed_by(input.viewer.as_ref()) {
            return Err(PermissionError::ViewMemo.into());
        }

        Ok(memo)
    }
}
