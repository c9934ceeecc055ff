//! Collaborator traits implemented by the host server.
//!
//! The core never talks to the game server directly. The host hands in
//! implementations of these seams: a scoreboard-like presentation sink,
//! a roster that resolves names and lists online players, and a chat
//! feedback channel for command replies.
//!
//! Recording implementations ([`RecordingSink`], [`FixedRoster`],
//! [`BufferedFeedback`]) are provided so the projector and command
//! surface can be exercised end-to-end without a live server.

use blockstats_types::{PlayerId, PlayerRef};

/// Scoreboard-like display the projector pushes values into.
///
/// The sink has no state the core reads back, and nothing here can fail
/// from the core's perspective; the host absorbs its own rendering
/// problems.
pub trait PresentationSink {
    /// Create (or replace) the objective the board currently renders.
    fn create_objective(&mut self, name: &str, label: &str);

    /// Remove a previously created objective.
    fn remove_objective(&mut self, name: &str);

    /// Set the displayed score for one player.
    fn set_score(&mut self, player: &PlayerRef, value: u64);
}

/// Identity provider and roster for currently online players.
pub trait PlayerDirectory {
    /// Resolve a display name to a player id, or `None` if the player is
    /// offline or unknown.
    fn resolve(&self, name: &str) -> Option<PlayerId>;

    /// All currently online players.
    fn online_players(&self) -> Vec<PlayerRef>;
}

/// Chat feedback channel for command replies.
pub trait Feedback {
    /// Send an informational line to the command issuer.
    fn info(&mut self, message: &str);

    /// Send an error line to the command issuer.
    fn error(&mut self, message: &str);
}

/// One operation observed by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOp {
    /// An objective was created.
    CreateObjective {
        /// Objective name.
        name: String,
        /// Display label.
        label: String,
    },
    /// An objective was removed.
    RemoveObjective {
        /// Objective name.
        name: String,
    },
    /// A score was pushed for one player.
    SetScore {
        /// The player whose score was set.
        player: PlayerId,
        /// The displayed value.
        value: u64,
    },
}

/// A [`PresentationSink`] that records every operation in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Operations in the order they were applied.
    pub ops: Vec<SinkOp>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }
}

impl PresentationSink for RecordingSink {
    fn create_objective(&mut self, name: &str, label: &str) {
        self.ops.push(SinkOp::CreateObjective {
            name: name.to_owned(),
            label: label.to_owned(),
        });
    }

    fn remove_objective(&mut self, name: &str) {
        self.ops.push(SinkOp::RemoveObjective {
            name: name.to_owned(),
        });
    }

    fn set_score(&mut self, player: &PlayerRef, value: u64) {
        self.ops.push(SinkOp::SetScore {
            player: player.id,
            value,
        });
    }
}

/// A [`PlayerDirectory`] over a fixed list of players.
#[derive(Debug, Default)]
pub struct FixedRoster {
    players: Vec<PlayerRef>,
}

impl FixedRoster {
    /// Create a roster from a fixed player list.
    pub const fn new(players: Vec<PlayerRef>) -> Self {
        Self { players }
    }
}

impl PlayerDirectory for FixedRoster {
    fn resolve(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|player| player.name == name)
            .map(|player| player.id)
    }

    fn online_players(&self) -> Vec<PlayerRef> {
        self.players.clone()
    }
}

/// A [`Feedback`] implementation that buffers replies for inspection.
#[derive(Debug, Default)]
pub struct BufferedFeedback {
    /// Informational lines, in order.
    pub infos: Vec<String>,
    /// Error lines, in order.
    pub errors: Vec<String>,
}

impl BufferedFeedback {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            infos: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl Feedback for BufferedFeedback {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_owned());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_owned());
    }
}
