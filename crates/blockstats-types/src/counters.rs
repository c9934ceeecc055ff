//! Per-player counters and the counter selector.
//!
//! [`PlayerCounters`] is the stored record: how many blocks a player has
//! mined and placed. [`CounterKind`] names one of the two counters; it is
//! used both to address a field in the store (increment/set) and as the
//! metric the rotating board currently projects -- the two roles range over
//! the same two values, so a single type keeps them from drifting apart.

use serde::{Deserialize, Serialize};

/// Selects one of the two tracked counters.
///
/// Doubles as the display metric of the rotating board. Carries the
/// storage column name, the scoreboard objective identity, and the
/// human-readable board label for its counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterKind {
    /// Blocks mined (broken) by the player.
    Mined,
    /// Blocks placed by the player.
    Placed,
}

impl CounterKind {
    /// Storage column holding this counter.
    pub const fn column(self) -> &'static str {
        match self {
            Self::Mined => "mined",
            Self::Placed => "placed",
        }
    }

    /// Scoreboard objective name used when this counter is on display.
    pub const fn objective_name(self) -> &'static str {
        match self {
            Self::Mined => "stats_mined",
            Self::Placed => "stats_placed",
        }
    }

    /// Human-readable board label for this counter.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mined => "Blocks Mined",
            Self::Placed => "Blocks Placed",
        }
    }

    /// The other counter. The board rotation alternates between the two.
    pub const fn other(self) -> Self {
        match self {
            Self::Mined => Self::Placed,
            Self::Placed => Self::Mined,
        }
    }
}

impl core::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.column())
    }
}

/// The counters stored for a single player.
///
/// An identifier with no stored row reads as the default `(0, 0)`; rows are
/// created implicitly on first increment or explicit set and never deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCounters {
    /// Blocks mined.
    pub mined: u64,
    /// Blocks placed.
    pub placed: u64,
}

impl PlayerCounters {
    /// Create counters from explicit values.
    pub const fn new(mined: u64, placed: u64) -> Self {
        Self { mined, placed }
    }

    /// Return the value of the counter named by `kind`.
    pub const fn value_of(self, kind: CounterKind) -> u64 {
        match kind {
            CounterKind::Mined => self.mined,
            CounterKind::Placed => self.placed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_alternates_between_the_two_kinds() {
        assert_eq!(CounterKind::Mined.other(), CounterKind::Placed);
        assert_eq!(CounterKind::Placed.other(), CounterKind::Mined);
        assert_eq!(CounterKind::Mined.other().other(), CounterKind::Mined);
    }

    #[test]
    fn value_of_selects_the_named_field() {
        let counters = PlayerCounters::new(3, 10);
        assert_eq!(counters.value_of(CounterKind::Mined), 3);
        assert_eq!(counters.value_of(CounterKind::Placed), 10);
    }

    #[test]
    fn default_counters_are_zero() {
        assert_eq!(PlayerCounters::default(), PlayerCounters::new(0, 0));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn counters_survive_a_serde_round_trip() {
        let counters = PlayerCounters::new(7, 11);
        let json = serde_json::to_string(&counters).unwrap();
        let back: PlayerCounters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counters);
    }

    #[test]
    fn objective_names_differ_per_kind() {
        assert_ne!(
            CounterKind::Mined.objective_name(),
            CounterKind::Placed.objective_name()
        );
    }
}
