//! Delete a memo.

use std::sync::Arc;

use tracing::info;

use crate::domain::{MemoId, UserId};
use crate::error::{NotFoundError, PermissionError, Result};
use crate::port::MemoRepository;

#[derive(Debug, Clone)]
pub struct DeleteMemoInput {
    pub memo_id: MemoId,
    /// The caller; must own the memo.
    pub user_id: UserId,
}

/// Load, authorize, delete — in that order. The repository delete runs only
/// after the ownership check passes, so an authorization failure has no side
/// effects.
pub struct DeleteMemo {
    memos: Arc<dyn MemoRepository>,
}

impl DeleteMemo {
    pub fn new(memos: Arc<dyn MemoRepository>) -> Self {
        Self { memos }
    }

    pub async fn execute(&self, input: DeleteMemoInput) -> Result<()> {
        let memo = self
            .memos
            .find_by_id(&input.memo_id)
            .await?
            .ok_or(NotFoundError::Memo)?;

        if !memo.is_owned_by(&input.user_id) {
            return Err(PermissionError::DeleteMemo.into());
        }

        self.memos.delete(&input.memo_id).await?;

        info!(memo_id = %input.memo_id, "Memo deleted");
        Ok(())
    }
}
