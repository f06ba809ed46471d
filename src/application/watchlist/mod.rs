//! Watchlist use cases.

mod add;
mod check;
mod list;
mod remove;

pub use add::{AddToWatchlist, AddToWatchlistInput};
pub use check::{CheckWatchlist, CheckWatchlistInput, CheckWatchlistOutput};
pub use list::{ListWatchlist, ListWatchlistInput, WatchlistOutput};
pub use remove::{RemoveFromWatchlist, RemoveFromWatchlistInput};
