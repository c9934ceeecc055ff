//! Stats cache, rotating board projector, and command surface.
//!
//! This crate owns everything between the durable counter store and the
//! host server: the in-memory cache of last-known counters, the service
//! facade that applies the degrade-to-default availability policy, the
//! tick-driven rotation that alternates the displayed metric, and the
//! `stats` command surface.
//!
//! # Modules
//!
//! - [`cache`] -- In-memory map of last-known counters per player.
//! - [`commands`] -- Typed `stats` command parsing and execution.
//! - [`config`] -- Configuration loading from `blockstats.yaml`.
//! - [`host`] -- Collaborator traits implemented by the host server
//!   (scoreboard, roster, chat feedback) plus recording test doubles.
//! - [`projector`] -- Flip-driven scoreboard rebuild and immediate pushes.
//! - [`rotation`] -- The display rotation state machine.
//! - [`service`] -- [`StatsService`], the store+cache facade.
//!
//! [`StatsService`]: service::StatsService

pub mod cache;
pub mod commands;
pub mod config;
pub mod host;
pub mod projector;
pub mod rotation;
pub mod service;

// Re-export primary types for convenience.
pub use cache::StatsCache;
pub use commands::{CommandContext, CommandError, CommandOutcome, StatsCommand};
pub use config::{BoardConfig, ConfigError, DatabaseConfig, StatsConfig};
pub use host::{
    BufferedFeedback, Feedback, FixedRoster, PlayerDirectory, PresentationSink, RecordingSink,
    SinkOp,
};
pub use projector::Projector;
pub use rotation::{BoardRotation, RotationError};
pub use service::StatsService;
