//! List the caller's own memos.

use std::sync::Arc;

use crate::domain::UserId;
use crate::error::Result;
use crate::port::{MemoRepository, PageRequest};

use super::MemoPage;
use crate::application::pagination::Pagination;

#[derive(Debug, Clone)]
pub struct ListUserMemosInput {
    pub user_id: UserId,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// One page of the caller's memos, pinned first then most recently updated.
/// The ordering itself is the repository's contract; this use case shapes
/// the pagination roll-up.
pub struct ListUserMemos {
    memos: Arc<dyn MemoRepository>,
}

impl ListUserMemos {
    pub fn new(memos: Arc<dyn MemoRepository>) -> Self {
        Self { memos }
    }

    pub async fn execute(&self, input: ListUserMemosInput) -> Result<MemoPage> {
        let request = PageRequest::new(input.page, input.limit);
        let page = self.memos.find_by_user(&input.user_id, request).await?;

        Ok(MemoPage {
            memos: page.items,
            pagination: Pagination::new(request, page.total),
        })
    }
}
