//! Value types exchanged with the host server.
//!
//! The host delivers a [`BlockEvent`] for every tracked block interaction
//! and reports online players as [`PlayerRef`] entries through its roster.

use serde::{Deserialize, Serialize};

use crate::counters::CounterKind;
use crate::ids::PlayerId;

/// A tracked block interaction delivered by the host event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEvent {
    /// The player who mined or placed the block.
    pub player: PlayerId,
    /// Which counter the event increments.
    pub kind: CounterKind,
}

impl BlockEvent {
    /// A block-mined event for `player`.
    pub const fn mined(player: PlayerId) -> Self {
        Self {
            player,
            kind: CounterKind::Mined,
        }
    }

    /// A block-placed event for `player`.
    pub const fn placed(player: PlayerId) -> Self {
        Self {
            player,
            kind: CounterKind::Placed,
        }
    }
}

/// An online player as reported by the host roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    /// Stable player identifier.
    pub id: PlayerId,
    /// Current display name.
    pub name: String,
}

impl PlayerRef {
    /// Create a roster entry.
    pub const fn new(id: PlayerId, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_constructors_pick_the_matching_kind() {
        let player = PlayerId::new();
        assert_eq!(BlockEvent::mined(player).kind, CounterKind::Mined);
        assert_eq!(BlockEvent::placed(player).kind, CounterKind::Placed);
        assert_eq!(BlockEvent::mined(player).player, player);
    }
}
