//! Shared type definitions for the blockstats service.
//!
//! This crate is the single source of truth for the types used across the
//! blockstats workspace: the player identifier, the per-player counter
//! model, and the value types exchanged with the host server.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for player identifiers
//! - [`counters`] -- Per-player counters and the counter/metric selector
//! - [`events`] -- Block events delivered by the host and roster entries

pub mod counters;
pub mod events;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use counters::{CounterKind, PlayerCounters};
pub use events::{BlockEvent, PlayerRef};
pub use ids::PlayerId;
