//! Repository traits (hexagonal ports). Depend only on domain.
//!
//! Storage adapters (an ORM-backed implementation, the in-memory
//! [`testkit`](crate::testkit) fakes) implement these traits; the
//! [`application`](crate::application) layer consumes them and nothing else.
//! Every method is async and returns the crate [`Result`](crate::Result);
//! I/O failures surface as
//! [`Error::Repository`](crate::Error::Repository) and pass through
//! untouched.

mod memo;
mod pagination;
mod ticker;
mod watchlist;

pub use memo::MemoRepository;
pub use pagination::{Page, PageRequest};
pub use ticker::TickerRepository;
pub use watchlist::WatchlistRepository;
