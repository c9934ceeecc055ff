//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Players are identified by a stable UUID assigned by the host server.
//! Wrapping it in a newtype prevents accidental mixing with other UUIDs at
//! compile time. The host hands us existing identifiers via `From<Uuid>`;
//! the `new()` constructor generates UUID v7 (time-ordered) for cases where
//! app-side generation is needed (tests, the console harness).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable, opaque identifier for a player.
///
/// Exactly one `player_stats` row exists per identifier; an identifier that
/// was never written reads as zeroed counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PlayerId> for Uuid {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn display_matches_inner_uuid() {
        let raw = Uuid::now_v7();
        let id = PlayerId::from(raw);
        assert_eq!(id.to_string(), raw.to_string());
    }
}
