//! Ticker code value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A 4-digit code identifying a listed security.
///
/// Construction is two-tier: [`TickerCode::try_new`] validates untrusted
/// input, while [`TickerCode::reconstruct`] rehydrates from trusted storage
/// without validation. The split is deliberate; never expose `reconstruct`
/// to user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerCode(String);

impl TickerCode {
    /// Validate and create a ticker code.
    pub fn try_new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::InvalidTickerCode { value });
        }
        Ok(Self(value))
    }

    /// Rehydrate a ticker code from a trusted source. Skips validation.
    pub fn reconstruct(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether `value` is exactly four ASCII digits.
    pub fn is_valid(value: &str) -> bool {
        value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TickerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_digit_codes() {
        let code = TickerCode::try_new("7203").unwrap();
        assert_eq!(code.as_str(), "7203");
        assert_eq!(TickerCode::try_new("0000").unwrap().as_str(), "0000");
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["", "720", "72030", "72a3", "７２０３", "abcd", " 7203"] {
            assert!(
                matches!(
                    TickerCode::try_new(bad),
                    Err(DomainError::InvalidTickerCode { .. })
                ),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn reconstruct_skips_validation() {
        // Trusted rehydration keeps whatever storage handed back.
        assert_eq!(TickerCode::reconstruct("not-a-code").as_str(), "not-a-code");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            TickerCode::try_new("7203").unwrap(),
            TickerCode::reconstruct("7203")
        );
    }
}
