//! Host-side implementations of the core's collaborator traits.
//!
//! The harness stands in for a real game server: the roster tracks
//! players joined via the console, the scoreboard renders as structured
//! log lines, and command feedback goes straight to stdout.

use blockstats_core::{Feedback, PlayerDirectory, PresentationSink};
use blockstats_types::{PlayerId, PlayerRef};

/// Console-managed roster of online players.
#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<PlayerRef>,
}

impl Roster {
    /// Create an empty roster.
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Add a player by name, returning their roster entry. Joining an
    /// already online name returns the existing entry.
    pub fn join(&mut self, name: &str) -> PlayerRef {
        if let Some(existing) = self.players.iter().find(|p| p.name == name) {
            return existing.clone();
        }
        let player = PlayerRef::new(PlayerId::new(), name.to_owned());
        self.players.push(player.clone());
        player
    }

    /// Remove a player by name. Returns whether they were online.
    pub fn leave(&mut self, name: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.name != name);
        self.players.len() < before
    }
}

impl PlayerDirectory for Roster {
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

/// Scoreboard rendered as structured log lines.
#[derive(Debug, Default)]
pub struct LogSink;

impl PresentationSink for LogSink {
    fn create_objective(&mut self, name: &str, label: &str) {
        tracing::info!(objective = name, label, "Scoreboard objective created");
    }

    fn remove_objective(&mut self, name: &str) {
        tracing::info!(objective = name, "Scoreboard objective removed");
    }

    fn set_score(&mut self, player: &PlayerRef, value: u64) {
        tracing::info!(player = %player.name, value, "Score updated");
    }
}

/// Command feedback printed to the console.
#[derive(Debug, Default)]
pub struct ConsoleFeedback;

impl Feedback for ConsoleFeedback {
    fn info(&mut self, message: &str) {
        println!("[STATISTICS] {message}");
    }

    fn error(&mut self, message: &str) {
        eprintln!("[STATISTICS] {message}");
    }
}

#[cfg(test)]
mod tests {
    use blockstats_core::PlayerDirectory as _;

    use super::Roster;

    #[test]
    fn join_resolve_and_leave() {
        let mut roster = Roster::new();

        let alice = roster.join("Alice");
        assert_eq!(roster.resolve("Alice"), Some(alice.id));
        assert_eq!(roster.resolve("Bob"), None);

        // Re-joining keeps the same identity.
        assert_eq!(roster.join("Alice").id, alice.id);
        assert_eq!(roster.online_players().len(), 1);

        assert!(roster.leave("Alice"));
        assert!(!roster.leave("Alice"));
        assert_eq!(roster.resolve("Alice"), None);
    }
}
