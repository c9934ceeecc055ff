//! Flip-driven scoreboard projection.
//!
//! The projector is ticked once per scheduled game tick. When the
//! rotation flips, it tears down the previous objective, installs one
//! named and labeled for the newly active metric, and pushes the cached
//! value of that metric for every online player. Administrative writes
//! bypass the rotation entirely via [`push_player`] so the visible board
//! matches a just-issued command immediately.
//!
//! Nothing here returns an error to the tick scheduler; storage problems
//! are absorbed by the service layer.
//!
//! [`push_player`]: Projector::push_player

use blockstats_types::PlayerRef;

use crate::host::{PlayerDirectory, PresentationSink};
use crate::rotation::{BoardRotation, RotationError};
use crate::service::StatsService;

/// Drives the rotating scoreboard from the tick signal.
#[derive(Debug)]
pub struct Projector {
    rotation: BoardRotation,
    /// Name of the objective currently installed in the sink, if any.
    objective: Option<String>,
}

impl Projector {
    /// Create a projector that flips the board every
    /// `switch_interval_ticks` ticks.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError`] if the interval is zero.
    pub fn new(switch_interval_ticks: u64) -> Result<Self, RotationError> {
        Ok(Self {
            rotation: BoardRotation::new(switch_interval_ticks)?,
            objective: None,
        })
    }

    /// The rotation state machine (inspection and tests).
    pub const fn rotation(&self) -> &BoardRotation {
        &self.rotation
    }

    /// Handle one scheduled tick: advance the rotation and, on a flip,
    /// rebuild the board for the newly active metric.
    pub async fn tick(
        &mut self,
        service: &mut StatsService,
        directory: &dyn PlayerDirectory,
        sink: &mut dyn PresentationSink,
    ) {
        if self.rotation.advance() {
            self.rebuild(service, directory, sink).await;
        }
    }

    /// Tear down the previous objective, install one for the active
    /// metric, and push every online player's value of that metric.
    pub async fn rebuild(
        &mut self,
        service: &mut StatsService,
        directory: &dyn PlayerDirectory,
        sink: &mut dyn PresentationSink,
    ) {
        if let Some(old) = self.objective.take() {
            sink.remove_objective(&old);
        }

        let metric = self.rotation.metric();
        sink.create_objective(metric.objective_name(), metric.label());
        self.objective = Some(metric.objective_name().to_owned());

        let players = directory.online_players();
        for player in &players {
            let counters = service.lookup(player.id).await;
            sink.set_score(player, counters.value_of(metric));
        }

        tracing::debug!(
            metric = %metric,
            players = players.len(),
            "Rebuilt scoreboard objective"
        );
    }

    /// Push one player's value of the active metric immediately, without
    /// waiting for the next flip. No-op until the board has been built
    /// for the first time.
    pub async fn push_player(
        &self,
        service: &mut StatsService,
        player: &PlayerRef,
        sink: &mut dyn PresentationSink,
    ) {
        if self.objective.is_none() {
            return;
        }
        let counters = service.lookup(player.id).await;
        sink.set_score(player, counters.value_of(self.rotation.metric()));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use blockstats_db::{SqliteConfig, SqliteDb};
    use blockstats_types::{CounterKind, PlayerId, PlayerRef};

    use super::Projector;
    use crate::host::{FixedRoster, RecordingSink, SinkOp};
    use crate::service::StatsService;

    async fn service_with_memory_store() -> StatsService {
        let db = SqliteDb::connect(&SqliteConfig::in_memory()).await.unwrap();
        db.run_migrations().await.unwrap();
        StatsService::new(db)
    }

    fn roster_of(players: &[&PlayerRef]) -> FixedRoster {
        FixedRoster::new(players.iter().map(|p| (*p).clone()).collect())
    }

    #[tokio::test]
    async fn flip_rebuilds_objective_and_pushes_all_players() {
        let mut service = service_with_memory_store().await;
        let mut projector = Projector::new(100).unwrap();
        let mut sink = RecordingSink::new();

        let alice = PlayerRef::new(PlayerId::new(), "Alice".to_owned());
        let bob = PlayerRef::new(PlayerId::new(), "Bob".to_owned());
        let roster = roster_of(&[&alice, &bob]);

        for _ in 0..3 {
            service.record(alice.id, CounterKind::Mined).await;
        }
        service.record(bob.id, CounterKind::Placed).await;

        // Ticks 1..=99: nothing pushed.
        for _ in 0..99 {
            projector.tick(&mut service, &roster, &mut sink).await;
        }
        assert!(sink.ops.is_empty());

        // Tick 100: flip to Placed, board rebuilt.
        projector.tick(&mut service, &roster, &mut sink).await;
        assert_eq!(projector.rotation().metric(), CounterKind::Placed);
        assert_eq!(
            sink.ops,
            vec![
                SinkOp::CreateObjective {
                    name: "stats_placed".to_owned(),
                    label: "Blocks Placed".to_owned(),
                },
                SinkOp::SetScore {
                    player: alice.id,
                    value: 0,
                },
                SinkOp::SetScore {
                    player: bob.id,
                    value: 1,
                },
            ]
        );
    }

    #[tokio::test]
    async fn second_flip_removes_prior_objective() {
        let mut service = service_with_memory_store().await;
        let mut projector = Projector::new(10).unwrap();
        let mut sink = RecordingSink::new();
        let roster = FixedRoster::default();

        for _ in 0..20 {
            projector.tick(&mut service, &roster, &mut sink).await;
        }

        assert_eq!(projector.rotation().metric(), CounterKind::Mined);
        assert_eq!(
            sink.ops,
            vec![
                SinkOp::CreateObjective {
                    name: "stats_placed".to_owned(),
                    label: "Blocks Placed".to_owned(),
                },
                SinkOp::RemoveObjective {
                    name: "stats_placed".to_owned(),
                },
                SinkOp::CreateObjective {
                    name: "stats_mined".to_owned(),
                    label: "Blocks Mined".to_owned(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn push_player_updates_one_entity_without_a_flip() {
        let mut service = service_with_memory_store().await;
        let mut projector = Projector::new(100).unwrap();
        let mut sink = RecordingSink::new();

        let alice = PlayerRef::new(PlayerId::new(), "Alice".to_owned());
        let roster = roster_of(&[&alice]);

        // Build the board once so an objective exists.
        projector.rebuild(&mut service, &roster, &mut sink).await;
        sink.ops.clear();

        let counters = service.set(alice.id, CounterKind::Mined, 50).await;
        assert_eq!(counters.mined, 50);
        projector.push_player(&mut service, &alice, &mut sink).await;

        assert_eq!(
            sink.ops,
            vec![SinkOp::SetScore {
                player: alice.id,
                value: 50,
            }]
        );
    }

    #[tokio::test]
    async fn push_player_is_a_noop_before_first_build() {
        let mut service = service_with_memory_store().await;
        let projector = Projector::new(100).unwrap();
        let mut sink = RecordingSink::new();

        let alice = PlayerRef::new(PlayerId::new(), "Alice".to_owned());
        projector.push_player(&mut service, &alice, &mut sink).await;

        assert!(sink.ops.is_empty());
    }
}
