//! Memo use cases: CRUD plus tag and keyword queries.

mod create;
mod delete;
mod filter_by_tags;
mod get;
mod list;
mod search;
mod update;

pub use create::{CreateMemo, CreateMemoInput};
pub use delete::{DeleteMemo, DeleteMemoInput};
pub use filter_by_tags::{FilterMemosByTags, FilterMemosByTagsInput};
pub use get::{GetMemo, GetMemoInput};
pub use list::{ListUserMemos, ListUserMemosInput};
pub use search::{SearchMemos, SearchMemosInput};
pub use update::{UpdateMemo, UpdateMemoInput, UpdateMemoPatch};

use crate::application::pagination::Pagination;
use crate::domain::Memo;

/// One page of memos plus pagination metadata, shared by the listing and
/// query use cases.
#[derive(Debug, Clone)]
pub struct MemoPage {
    pub memos: Vec<Memo>,
    pub pagination: Pagination,
}
