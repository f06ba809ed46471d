//! Memo visibility value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a memo is visible to other users.
///
/// Transitions return the new state; the enum is `Copy`, so callers replace
/// their value rather than mutate in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    /// Parse from a stored or user-supplied string.
    ///
    /// Anything other than the exact string `"public"` falls back to
    /// `Private`. The fallback is a deliberate fail-safe: a corrupt or
    /// unknown value can only ever narrow exposure, never widen it.
    pub fn parse(value: &str) -> Self {
        if value == "public" {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }

    /// Transition to public. No-op when already public.
    pub fn publish(self) -> Self {
        Visibility::Public
    }

    /// Transition to private. No-op when already private.
    pub fn unpublish(self) -> Self {
        Visibility::Private
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_exact_public() {
        assert!(Visibility::parse("public").is_public());
        for other in ["", "PUBLIC", "Public", "invalid", "private", " public"] {
            assert!(
                Visibility::parse(other).is_private(),
                "expected private fallback for {other:?}"
            );
        }
    }

    #[test]
    fn transitions_are_idempotent() {
        let v = Visibility::Private.publish().publish();
        assert!(v.is_public());
        assert!(v.unpublish().unpublish().is_private());
    }

    #[test]
    fn default_is_private() {
        assert!(Visibility::default().is_private());
    }
}
