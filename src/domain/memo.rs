//! Memo entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::id::{MemoId, UserId};
use crate::domain::note_body::NoteBody;
use crate::domain::ticker_code::TickerCode;
use crate::domain::visibility::Visibility;

/// Input for creating a fresh memo. Untrusted; validated by [`Memo::create`].
#[derive(Debug, Clone)]
pub struct NewMemo {
    pub id: MemoId,
    pub user_id: UserId,
    pub ticker_code: String,
    pub content: String,
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub visibility: Option<Visibility>,
}

/// Raw field bag for trusted rehydration and adapter handoff.
///
/// `visibility` stays a string here; [`Memo::reconstruct`] parses it with the
/// private fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoSnapshot {
    pub id: String,
    pub user_id: String,
    pub ticker_code: String,
    pub title: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub pinned: bool,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user-authored note attached to a ticker. Identity is the id.
///
/// Fields are private; every mutation goes through a whitelisted method that
/// runs its validation and bumps `updated_at`. External code cannot put a
/// memo into a state its invariants forbid.
#[derive(Debug, Clone, PartialEq)]
pub struct Memo {
    id: MemoId,
    user_id: UserId,
    ticker_code: TickerCode,
    title: Option<String>,
    body: NoteBody,
    tags: Vec<String>,
    pinned: bool,
    visibility: Visibility,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Memo {
    /// Maximum number of tags a memo can carry, enforced by
    /// [`update_tags`](Self::update_tags).
    pub const MAX_TAGS: usize = 10;

    /// Validate and create a fresh memo.
    ///
    /// Defaults: unpinned, private, both timestamps stamped with the same
    /// instant. An empty-string title is normalized to `None`.
    pub fn create(input: NewMemo) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id: input.id,
            user_id: input.user_id,
            ticker_code: TickerCode::try_new(input.ticker_code)?,
            title: input.title.filter(|t| !t.is_empty()),
            body: NoteBody::try_new(&input.content)?,
            tags: input.tags,
            pinned: false,
            visibility: input.visibility.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a memo from trusted storage. Skips all validation.
    pub fn reconstruct(snapshot: MemoSnapshot) -> Self {
        Self {
            id: MemoId::new(snapshot.id),
            user_id: UserId::new(snapshot.user_id),
            ticker_code: TickerCode::reconstruct(snapshot.ticker_code),
            title: snapshot.title,
            body: NoteBody::reconstruct(snapshot.content),
            tags: snapshot.tags,
            pinned: snapshot.pinned,
            visibility: Visibility::parse(&snapshot.visibility),
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        }
    }

    pub fn id(&self) -> &MemoId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn ticker_code(&self) -> &TickerCode {
        &self.ticker_code
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> &NoteBody {
        &self.body
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Strict owner check.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Whether `viewer` may read this memo.
    ///
    /// Public memos are visible to everyone, anonymous viewers included.
    /// Private memos are visible only to their owner.
    pub fn can_be_viewed_by(&self, viewer: Option<&UserId>) -> bool {
        if self.visibility.is_public() {
            return true;
        }
        viewer.is_some_and(|id| self.is_owned_by(id))
    }

    pub fn update_title(&mut self, title: Option<String>) {
        self.title = title;
        self.touch();
    }

    /// Replace the content. Fails on blank or over-length input.
    pub fn update_content(&mut self, content: &str) -> Result<(), DomainError> {
        self.body = NoteBody::try_new(content)?;
        self.touch();
        Ok(())
    }

    /// Replace the tag set. Fails when more than [`MAX_TAGS`](Self::MAX_TAGS)
    /// are given.
    pub fn update_tags(&mut self, tags: Vec<String>) -> Result<(), DomainError> {
        if tags.len() > Self::MAX_TAGS {
            return Err(DomainError::TooManyTags {
                count: tags.len(),
                max: Self::MAX_TAGS,
            });
        }
        self.tags = tags;
        self.touch();
        Ok(())
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.touch();
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
        self.touch();
    }

    pub fn toggle_pin(&mut self) {
        self.pinned = !self.pinned;
        self.touch();
    }

    pub fn publish(&mut self) {
        self.visibility = self.visibility.publish();
        self.touch();
    }

    pub fn unpublish(&mut self) {
        self.visibility = self.visibility.unpublish();
        self.touch();
    }

    /// Raw field bag for adapters (persistence, API shaping).
    pub fn snapshot(&self) -> MemoSnapshot {
        MemoSnapshot {
            id: self.id.as_str().to_string(),
            user_id: self.user_id.as_str().to_string(),
            ticker_code: self.ticker_code.as_str().to_string(),
            title: self.title.clone(),
            content: self.body.as_str().to_string(),
            tags: self.tags.clone(),
            pinned: self.pinned,
            visibility: self.visibility.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
