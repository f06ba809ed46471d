//! Ticker lookup and search use cases.

mod get;
mod search;

pub use get::{GetTicker, GetTickerInput};
pub use search::{SearchTickers, SearchTickersInput, TickerPage};
