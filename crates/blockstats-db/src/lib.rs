//! Durable counter storage for the blockstats service (embedded SQLite).
//!
//! SQLite is the single source of truth for per-player counters. Rows in
//! the `player_stats` table are created implicitly on first write and never
//! deleted. All mutations are single-statement conditional upserts, so two
//! overlapping writes to the same player cannot lose an update regardless
//! of the caller's threading model.
//!
//! Every operation surfaces failures as [`DbError`]; the availability
//! policy (degrade to zeroed reads, drop failed writes) belongs to the
//! caller, not to this crate.
//!
//! # Modules
//!
//! - [`sqlite`] -- Connection pool wrapper and configuration
//! - [`stats_store`] -- Counter upserts and point reads
//! - [`error`] -- Shared error type

pub mod error;
pub mod sqlite;
pub mod stats_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use sqlite::{SqliteConfig, SqliteDb};
pub use stats_store::StatsStore;
