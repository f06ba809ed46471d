//! Ticker entity.

use serde::{Deserialize, Serialize};

use crate::domain::ticker_code::TickerCode;

/// Raw field bag for trusted rehydration and adapter handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub code: String,
    pub name: String,
    pub market_segment: Option<String>,
    pub industry33_code: Option<String>,
    pub industry33_name: Option<String>,
    pub industry17_code: Option<String>,
    pub industry17_name: Option<String>,
    pub scale_code: Option<String>,
    pub scale_name: Option<String>,
}

/// Reference data for a listed security. Identity is the code.
///
/// Tickers are descriptive master data maintained outside this system, so
/// there are no mutators and no validated construction path; rows are
/// recreated wholesale on reconstruction. The classification fields follow
/// the exchange's 33/17-industry and size-scale taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    code: TickerCode,
    name: String,
    market_segment: Option<String>,
    industry33_code: Option<String>,
    industry33_name: Option<String>,
    industry17_code: Option<String>,
    industry17_name: Option<String>,
    scale_code: Option<String>,
    scale_name: Option<String>,
}

impl Ticker {
    /// Rehydrate a ticker from trusted storage.
    pub fn reconstruct(snapshot: TickerSnapshot) -> Self {
        Self {
            code: TickerCode::reconstruct(snapshot.code),
            name: snapshot.name,
            market_segment: snapshot.market_segment,
            industry33_code: snapshot.industry33_code,
            industry33_name: snapshot.industry33_name,
            industry17_code: snapshot.industry17_code,
            industry17_name: snapshot.industry17_name,
            scale_code: snapshot.scale_code,
            scale_name: snapshot.scale_name,
        }
    }

    pub fn code(&self) -> &TickerCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn market_segment(&self) -> Option<&str> {
        self.market_segment.as_deref()
    }

    pub fn industry33_code(&self) -> Option<&str> {
        self.industry33_code.as_deref()
    }

    pub fn industry33_name(&self) -> Option<&str> {
        self.industry33_name.as_deref()
    }

    pub fn industry17_code(&self) -> Option<&str> {
        self.industry17_code.as_deref()
    }

    pub fn industry17_name(&self) -> Option<&str> {
        self.industry17_name.as_deref()
    }

    pub fn scale_code(&self) -> Option<&str> {
        self.scale_code.as_deref()
    }

    pub fn scale_name(&self) -> Option<&str> {
        self.scale_name.as_deref()
    }

    /// Whether the ticker matches a search query.
    ///
    /// Case-insensitive substring match on the name, plain substring match
    /// on the code. An empty query matches every ticker; see the test below
    /// before relying on this for filtering.
    pub fn matches_query(&self, query: &str) -> bool {
        self.code.as_str().contains(query)
            || self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Raw field bag for adapters.
    pub fn snapshot(&self) -> TickerSnapshot {
        TickerSnapshot {
            code: self.code.as_str().to_string(),
            name: self.name.clone(),
            market_segment: self.market_segment.clone(),
            industry33_code: self.industry33_code.clone(),
            industry33_name: self.industry33_name.clone(),
            industry17_code: self.industry17_code.clone(),
            industry17_name: self.industry17_name.clone(),
            scale_code: self.scale_code.clone(),
            scale_name: self.scale_name.clone(),
        }
    }
}
