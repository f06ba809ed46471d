//! Keyword search over the caller's memos.

use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::UserId;
use crate::error::Result;
use crate::port::{MemoRepository, PageRequest};

use super::MemoPage;
use crate::application::pagination::Pagination;

#[derive(Debug, Clone)]
pub struct SearchMemosInput {
    pub user_id: UserId,
    /// Matched as a substring of the title, content, or the associated
    /// ticker's name or code. Must be non-blank after trimming.
    pub keyword: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Validate the keyword and delegate the substring search to the repository.
pub struct SearchMemos {
    memos: Arc<dyn MemoRepository>,
}

impl SearchMemos {
    pub fn new(memos: Arc<dyn MemoRepository>) -> Self {
        Self { memos }
    }

    pub async fn execute(&self, input: SearchMemosInput) -> Result<MemoPage> {
        let keyword = input.keyword.trim();
        if keyword.is_empty() {
            return Err(DomainError::BlankKeyword.into());
        }

        let request = PageRequest::new(input.page, input.limit);
        let page = self
            .memos
            .search_by_keyword(&input.user_id, keyword, request)
            .await?;

        Ok(MemoPage {
            memos: page.items,
            pagination: Pagination::new(request, page.total),
        })
    }
}
