//! Storage-agnostic domain model: value objects and entities.

pub mod error;

mod id;
mod memo;
mod note_body;
mod statistics;
mod tag_usage;
mod ticker;
mod ticker_code;
mod visibility;
mod watchlist;

pub use id::{MemoId, UserId, WatchlistItemId};
pub use memo::{Memo, MemoSnapshot, NewMemo};
pub use note_body::NoteBody;
pub use statistics::DashboardStatistics;
pub use tag_usage::TagUsage;
pub use ticker::{Ticker, TickerSnapshot};
pub use ticker_code::TickerCode;
pub use visibility::Visibility;
pub use watchlist::{WatchlistItem, WatchlistItemSnapshot};

pub(crate) use note_body::truncate_chars;
