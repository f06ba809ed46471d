//! Update a memo's fields in place.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Memo, MemoId, UserId, Visibility};
use crate::error::{NotFoundError, PermissionError, Result};
use crate::port::MemoRepository;

/// Partial update: a `Some` field is applied, a `None` field is left
/// untouched. For the optional title, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemoPatch {
    pub title: Option<Option<String>>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub pinned: Option<bool>,
    pub visibility: Option<Visibility>,
}

#[derive(Debug, Clone)]
pub struct UpdateMemoInput {
    pub memo_id: MemoId,
    /// The caller; must own the memo.
    pub user_id: UserId,
    pub patch: UpdateMemoPatch,
}

/// Load, authorize, patch, persist.
///
/// Existence is checked before ownership, and both before any mutation or
/// write. A validation failure from a mutator (blank content, too many
/// tags) aborts before `save`, so storage never sees a half-applied patch.
pub struct UpdateMemo {
    memos: Arc<dyn MemoRepository>,
}

impl UpdateMemo {
    pub fn new(memos: Arc<dyn MemoRepository>) -> Self {
        Self { memos }
    }

    pub async fn execute(&self, input: UpdateMemoInput) -> Result<Memo> {
        let mut memo = self
            .memos
            .find_by_id(&input.memo_id)
            .await?
            .ok_or(NotFoundError::Memo)?;

        if !memo.is_owned_by(&input.user_id) {
            return Err(PermissionError::EditMemo.into());
        }

        let patch = input.patch;
        if let Some(title) = patch.title {
            memo.update_title(title);
        }
        if let Some(content) = patch.content {
            memo.update_content(&content)?;
        }
        if let Some(tags) = patch.tags {
            memo.update_tags(tags)?;
        }
        if let Some(pinned) = patch.pinned {
            if pinned {
                memo.pin();
            } else {
                memo.unpin();
            }
        }
        if let Some(visibility) = patch.visibility {
            if visibility.is_public() {
                memo.publish();
            } else {
                memo.unpublish();
            }
        }

        self.memos.save(&memo).await?;

        debug!(memo_id = %memo.id(), "Memo updated");
        Ok(memo)
    }
}
