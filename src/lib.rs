//! Kabunote - stock memo domain and application core.
//!
//! This crate is the storage- and transport-agnostic core of a stock memo
//! service. Users attach private or public memos to 4-digit ticker codes,
//! tag and pin them, and keep a watchlist of tickers they follow.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **[`domain`]** - Value objects and entities with their invariants:
//!   ticker codes, memo bodies, visibility, the `Memo`/`Ticker`/`WatchlistItem`
//!   entities and their authorization predicates.
//! - **[`port`]** - Repository traits implemented by storage adapters
//!   (`MemoRepository`, `TickerRepository`, `WatchlistRepository`).
//! - **[`application`]** - One struct per use case. Callers construct a use
//!   case with concrete repositories, call `execute(input)`, and receive a
//!   value or a typed [`Error`](error::Error). Use cases never call each
//!   other; the caller composes them.
//! - **[`testkit`]** - In-memory repository fakes (requires the `testkit`
//!   feature) so the application layer is testable with zero I/O.
//!
//! HTTP routing, ORM persistence, session handling, and UI rendering are
//! deliberately outside this crate; they talk to it only through the ports
//! and the error taxonomy in [`error`].
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() -> kabunote::Result<()> {
//! use std::sync::Arc;
//! use kabunote::application::memo::{CreateMemo, CreateMemoInput};
//! use kabunote::testkit::InMemoryMemoRepository;
//!
//! let repo = Arc::new(InMemoryMemoRepository::new());
//! let create = CreateMemo::new(repo);
//! let memo = create
//!     .execute(CreateMemoInput {
//!         user_id: "user-1".into(),
//!         ticker_code: "7203".to_string(),
//!         content: "Long-term hold".to_string(),
//!         title: None,
//!         tags: vec!["auto".to_string()],
//!         visibility: None,
//!     })
//!     .await?;
//! assert!(memo.visibility().is_private());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use error::{Error, Result};
