//! End-to-end flow tests: events through the service, the rotating
//! board, and the command surface, against an in-memory store.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::missing_panics_doc)]

use blockstats_core::{
    BufferedFeedback, CommandContext, CommandOutcome, FixedRoster, Projector, RecordingSink,
    SinkOp, StatsCommand, StatsService,
};
use blockstats_db::{SqliteConfig, SqliteDb};
use blockstats_types::{BlockEvent, CounterKind, PlayerCounters, PlayerId, PlayerRef};

async fn service_with_memory_store() -> StatsService {
    let db = SqliteDb::connect(&SqliteConfig::in_memory())
        .await
        .expect("Failed to open in-memory SQLite database");
    db.run_migrations().await.expect("Failed to run migrations");
    StatsService::new(db)
}

#[tokio::test]
async fn board_alternates_metrics_over_full_rotations() {
    let mut service = service_with_memory_store().await;
    let mut projector = Projector::new(100).unwrap();
    let mut sink = RecordingSink::new();

    let alice = PlayerRef::new(PlayerId::new(), "Alice".to_owned());
    let roster = FixedRoster::new(vec![alice.clone()]);

    for _ in 0..3 {
        service.apply(BlockEvent::mined(alice.id)).await;
    }
    for _ in 0..5 {
        service.apply(BlockEvent::placed(alice.id)).await;
    }
    assert_eq!(service.load(alice.id).await, PlayerCounters::new(3, 5));

    // 100 ticks: first flip, board shows Placed.
    for _ in 0..100 {
        projector.tick(&mut service, &roster, &mut sink).await;
    }
    assert_eq!(projector.rotation().metric(), CounterKind::Placed);
    assert!(sink.ops.contains(&SinkOp::SetScore {
        player: alice.id,
        value: 5,
    }));

    // 100 more ticks: second flip, back to Mined.
    sink.ops.clear();
    for _ in 0..100 {
        projector.tick(&mut service, &roster, &mut sink).await;
    }
    assert_eq!(projector.rotation().metric(), CounterKind::Mined);
    assert!(sink.ops.contains(&SinkOp::SetScore {
        player: alice.id,
        value: 3,
    }));
}

#[tokio::test]
async fn administrative_set_reaches_the_board_between_flips() {
    let mut service = service_with_memory_store().await;
    let mut projector = Projector::new(100).unwrap();
    let mut sink = RecordingSink::new();
    let mut feedback = BufferedFeedback::new();

    let alice = PlayerRef::new(PlayerId::new(), "Alice".to_owned());
    let roster = FixedRoster::new(vec![alice.clone()]);

    // First flip installs the Placed board.
    for _ in 0..100 {
        projector.tick(&mut service, &roster, &mut sink).await;
    }
    sink.ops.clear();

    // Mid-rotation: 40 ticks, no flip.
    for _ in 0..40 {
        projector.tick(&mut service, &roster, &mut sink).await;
    }
    assert!(sink.ops.is_empty());

    let outcome = StatsCommand::parse("set placed Alice 12")
        .unwrap()
        .execute(
            CommandContext {
                issuer: None,
                elevated: true,
            },
            &mut service,
            &roster,
            &projector,
            &mut sink,
            &mut feedback,
        )
        .await;

    assert_eq!(outcome, CommandOutcome::Success);
    // The board updated without waiting for the next flip.
    assert_eq!(
        sink.ops,
        vec![SinkOp::SetScore {
            player: alice.id,
            value: 12,
        }]
    );

    // The cache serves the refreshed value.
    assert_eq!(service.lookup(alice.id).await, PlayerCounters::new(0, 12));
}

#[tokio::test]
async fn degraded_service_keeps_the_loop_alive() {
    let mut service = StatsService::disabled();
    let mut projector = Projector::new(10).unwrap();
    let mut sink = RecordingSink::new();

    let alice = PlayerRef::new(PlayerId::new(), "Alice".to_owned());
    let roster = FixedRoster::new(vec![alice.clone()]);

    service.apply(BlockEvent::mined(alice.id)).await;

    for _ in 0..10 {
        projector.tick(&mut service, &roster, &mut sink).await;
    }

    // The flip still happens; the degraded store reads as zero.
    assert!(sink.ops.contains(&SinkOp::SetScore {
        player: alice.id,
        value: 0,
    }));
}
