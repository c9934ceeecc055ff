//! In-memory cache of last-known counters.
//!
//! The cache is a shadow of the durable store, never the authority. It
//! exists so the periodic board refresh does not hit storage for every
//! online player on every flip. Entries never expire; the process owns
//! the store exclusively, so the only staleness possible is between a
//! direct store write and the refresh that follows it.
//!
//! The read-through and refresh-on-write contract lives in
//! [`StatsService`], which owns both this cache and the store handle.
//!
//! [`StatsService`]: crate::service::StatsService

use std::collections::HashMap;

use blockstats_types::{PlayerCounters, PlayerId};

/// Map from player id to the most recently known counters.
#[derive(Debug, Default)]
pub struct StatsCache {
    entries: HashMap<PlayerId, PlayerCounters>,
}

impl StatsCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store (or overwrite) the entry for `id`.
    pub fn put(&mut self, id: PlayerId, counters: PlayerCounters) {
        self.entries.insert(id, counters);
    }

    /// Return the cached entry for `id`, if any.
    pub fn get(&self, id: PlayerId) -> Option<PlayerCounters> {
        self.entries.get(&id).copied()
    }

    /// Whether an entry exists for `id`.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
