//! Service facade over the counter store and cache.
//!
//! [`StatsService`] is the one object the rest of the system talks to. It
//! owns the store handle and the in-memory cache, and it is where the
//! availability policy lives: the store surfaces every failure as a
//! `Result`, and this layer chooses to log and degrade -- zeroed reads,
//! dropped writes -- so the event source and tick scheduler never observe
//! an error from a stats update.
//!
//! A service whose storage failed to open runs *disabled*: reads default
//! to zero and writes are no-ops, but the host process keeps running.

use blockstats_db::{SqliteDb, StatsStore};
use blockstats_types::{BlockEvent, CounterKind, PlayerCounters, PlayerId};

use crate::cache::StatsCache;
use crate::config::DatabaseConfig;

/// Store handle plus cache, with the degrade-to-default policy applied
/// at this boundary.
pub struct StatsService {
    db: Option<SqliteDb>,
    cache: StatsCache,
}

impl StatsService {
    /// Open the counter store described by `config` and run migrations.
    ///
    /// A storage failure here is not fatal to the caller: the error is
    /// logged and the returned service is disabled (zeroed reads, no-op
    /// writes).
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let sqlite = config.sqlite_config();
        let db = match SqliteDb::connect(&sqlite).await {
            Ok(db) => db,
            Err(error) => {
                tracing::error!(%error, "Counter storage unavailable; stats feature disabled");
                return Self::disabled();
            }
        };
        if let Err(error) = db.run_migrations().await {
            tracing::error!(%error, "Counter storage migration failed; stats feature disabled");
            return Self::disabled();
        }
        Self::new(db)
    }

    /// Create a service over an already opened store.
    pub fn new(db: SqliteDb) -> Self {
        Self {
            db: Some(db),
            cache: StatsCache::new(),
        }
    }

    /// Create a disabled service: reads default to zero, writes are
    /// dropped.
    pub fn disabled() -> Self {
        Self {
            db: None,
            cache: StatsCache::new(),
        }
    }

    /// Whether a store is attached.
    pub const fn is_enabled(&self) -> bool {
        self.db.is_some()
    }

    /// The in-memory cache (inspection and tests).
    pub const fn cache(&self) -> &StatsCache {
        &self.cache
    }

    /// Apply a block event from the host: increment the named counter and
    /// refresh the cache entry.
    pub async fn apply(&mut self, event: BlockEvent) {
        self.record(event.player, event.kind).await;
    }

    /// Increment the counter named by `kind` for `id`, then refresh the
    /// cache entry from storage.
    ///
    /// A storage failure is logged and the write dropped; the cache is
    /// still refreshed so it tracks whatever storage actually holds.
    pub async fn record(&mut self, id: PlayerId, kind: CounterKind) {
        if let Some(db) = &self.db {
            let store = StatsStore::new(db.pool());
            if let Err(error) = store.increment(id, kind).await {
                tracing::warn!(player = %id, counter = %kind, %error, "Dropped counter increment");
            }
        }
        self.refresh(id).await;
    }

    /// Overwrite the counter named by `kind` with `value`, refresh the
    /// cache entry, and return the refreshed counters.
    ///
    /// Range validation happens at the command boundary; `value` is
    /// already non-negative by type.
    pub async fn set(&mut self, id: PlayerId, kind: CounterKind, value: u64) -> PlayerCounters {
        if let Some(db) = &self.db {
            let store = StatsStore::new(db.pool());
            if let Err(error) = store.set(id, kind, value).await {
                tracing::warn!(player = %id, counter = %kind, value, %error, "Dropped counter set");
            }
        }
        self.refresh(id).await;
        self.cache.get(id).unwrap_or_default()
    }

    /// Read counters for `id` directly from storage, bypassing the cache.
    ///
    /// Absent rows and storage failures both read as `(0, 0)`; a failure
    /// is logged, an absent row is not.
    pub async fn load(&self, id: PlayerId) -> PlayerCounters {
        let Some(db) = &self.db else {
            return PlayerCounters::default();
        };
        match StatsStore::new(db.pool()).get(id).await {
            Ok(counters) => counters,
            Err(error) => {
                tracing::warn!(player = %id, %error, "Counter read failed; treating as no data");
                PlayerCounters::default()
            }
        }
    }

    /// Unconditionally reload the cache entry for `id` from storage.
    ///
    /// Called after every increment and set, so the cache never serves
    /// counts older than the last write this process made.
    pub async fn refresh(&mut self, id: PlayerId) {
        let counters = self.load(id).await;
        self.cache.put(id, counters);
    }

    /// Read-through lookup: the cached entry if present, otherwise a load
    /// from storage that populates the cache.
    pub async fn lookup(&mut self, id: PlayerId) -> PlayerCounters {
        if let Some(counters) = self.cache.get(id) {
            return counters;
        }
        let counters = self.load(id).await;
        self.cache.put(id, counters);
        counters
    }

    /// Close the underlying pool, if any.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use blockstats_db::{SqliteConfig, SqliteDb, StatsStore};
    use blockstats_types::{BlockEvent, CounterKind, PlayerCounters, PlayerId};

    use super::StatsService;

    async fn service_with_memory_store() -> StatsService {
        let db = SqliteDb::connect(&SqliteConfig::in_memory()).await.unwrap();
        db.run_migrations().await.unwrap();
        StatsService::new(db)
    }

    #[tokio::test]
    async fn record_increments_and_refreshes_cache() {
        let mut service = service_with_memory_store().await;
        let player = PlayerId::new();

        for _ in 0..3 {
            service.apply(BlockEvent::mined(player)).await;
        }

        assert_eq!(
            service.cache().get(player),
            Some(PlayerCounters::new(3, 0))
        );
        assert_eq!(service.load(player).await, PlayerCounters::new(3, 0));
    }

    #[tokio::test]
    async fn set_overwrites_named_field_and_returns_refreshed_counters() {
        let mut service = service_with_memory_store().await;
        let player = PlayerId::new();

        for _ in 0..3 {
            service.record(player, CounterKind::Mined).await;
        }
        let counters = service.set(player, CounterKind::Placed, 10).await;

        assert_eq!(counters, PlayerCounters::new(3, 10));
        assert_eq!(
            service.cache().get(player),
            Some(PlayerCounters::new(3, 10))
        );
    }

    #[tokio::test]
    async fn lookup_populates_cache_and_serves_cached_entry() {
        let mut service = service_with_memory_store().await;
        let player = PlayerId::new();

        // Lookup on an unknown player caches the zeroed default.
        assert_eq!(service.lookup(player).await, PlayerCounters::default());
        assert!(service.cache().contains(player));

        // A write behind the cache's back is not observed by lookup...
        if let Some(db) = service_db(&service) {
            StatsStore::new(db.pool())
                .increment(player, CounterKind::Mined)
                .await
                .unwrap();
        }
        assert_eq!(service.lookup(player).await, PlayerCounters::default());

        // ...until a refresh reloads the entry.
        service.refresh(player).await;
        assert_eq!(service.lookup(player).await, PlayerCounters::new(1, 0));
    }

    #[tokio::test]
    async fn lookup_after_refresh_never_serves_the_stale_value() {
        let mut service = service_with_memory_store().await;
        let player = PlayerId::new();

        service.set(player, CounterKind::Mined, 5).await;
        assert_eq!(service.lookup(player).await, PlayerCounters::new(5, 0));

        service.set(player, CounterKind::Mined, 7).await;
        assert_eq!(service.lookup(player).await, PlayerCounters::new(7, 0));
    }

    #[tokio::test]
    async fn disabled_service_reads_zero_and_drops_writes() {
        let mut service = StatsService::disabled();
        let player = PlayerId::new();

        assert!(!service.is_enabled());

        service.record(player, CounterKind::Mined).await;
        let counters = service.set(player, CounterKind::Placed, 10).await;

        assert_eq!(counters, PlayerCounters::default());
        assert_eq!(service.load(player).await, PlayerCounters::default());
        assert_eq!(service.lookup(player).await, PlayerCounters::default());
    }

    /// Borrow the service's store handle for behind-the-cache writes.
    fn service_db(service: &StatsService) -> Option<&SqliteDb> {
        service.db.as_ref()
    }
}
