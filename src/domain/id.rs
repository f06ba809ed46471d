//! Identifier newtypes for domain entities.
//!
//! The inner strings are private so all construction goes through the
//! defined constructors. Fresh ids are UUIDv4; rehydrated ids are whatever
//! the storage adapter hands back.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from an existing string identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id! {
    /// Memo identifier.
    MemoId
}

string_id! {
    /// User identifier, issued by the (external) auth boundary.
    UserId
}

string_id! {
    /// Watchlist entry identifier.
    WatchlistItemId
}

impl MemoId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl WatchlistItemId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(MemoId::generate(), MemoId::generate());
        assert_ne!(WatchlistItemId::generate(), WatchlistItemId::generate());
    }

    #[test]
    fn ids_round_trip_through_display() {
        let id = UserId::new("user-1");
        assert_eq!(id.to_string(), "user-1");
        assert_eq!(UserId::from("user-1"), id);
    }
}
