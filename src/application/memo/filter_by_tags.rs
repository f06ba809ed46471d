//! Filter the caller's memos by tags.

use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::UserId;
use crate::error::Result;
use crate::port::{MemoRepository, PageRequest};

use super::MemoPage;
use crate::application::pagination::Pagination;

#[derive(Debug, Clone)]
pub struct FilterMemosByTagsInput {
    pub user_id: UserId,
    /// At least one tag. AND semantics: a result memo carries every listed
    /// tag, matched exactly and case-sensitively.
    pub tags: Vec<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub struct FilterMemosByTags {
    memos: Arc<dyn MemoRepository>,
}

impl FilterMemosByTags {
    pub fn new(memos: Arc<dyn MemoRepository>) -> Self {
        Self { memos }
    }

    pub async fn execute(&self, input: FilterMemosByTagsInput) -> Result<MemoPage> {
        if input.tags.is_empty() {
            return Err(DomainError::EmptyTagFilter.into());
        }

        let request = PageRequest::new(input.page, input.limit);
        let page = self
            .memos
            .find_by_user_and_tags(&input.user_id, &input.tags, request)
            .await?;

        Ok(MemoPage {
            memos: page.items,
            pagination: Pagination::new(request, page.total),
        })
    }
}
