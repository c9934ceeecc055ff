//! Counter store operations on the `player_stats` table.
//!
//! Every mutation is a single conditional upsert, never a read followed by
//! a write: the no-lost-updates property must not depend on the caller
//! dispatching from one thread. Reads are point lookups; a missing row
//! reads as zeroed counters and is not created.

use blockstats_types::{CounterKind, PlayerCounters, PlayerId};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Operations on the `player_stats` table.
pub struct StatsStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StatsStore<'a> {
    /// Create a new counter store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Add 1 to the counter named by `kind`, creating the row if needed.
    ///
    /// A missing row is created with the target counter at 1 and the other
    /// at 0; an existing row has only the target counter bumped. The whole
    /// operation is one statement, so concurrent increments on the same
    /// player cannot lose an update.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the upsert fails.
    pub async fn increment(&self, id: PlayerId, kind: CounterKind) -> Result<(), DbError> {
        let sql = match kind {
            CounterKind::Mined => {
                r"INSERT INTO player_stats (uuid, mined, placed) VALUES (?1, 1, 0)
                  ON CONFLICT(uuid) DO UPDATE SET mined = mined + 1"
            }
            CounterKind::Placed => {
                r"INSERT INTO player_stats (uuid, mined, placed) VALUES (?1, 0, 1)
                  ON CONFLICT(uuid) DO UPDATE SET placed = placed + 1"
            }
        };

        sqlx::query(sql)
            .bind(id.to_string())
            .execute(self.pool)
            .await?;

        tracing::debug!(player = %id, counter = %kind, "Incremented counter");
        Ok(())
    }

    /// Overwrite the counter named by `kind` with `value`.
    ///
    /// A missing row is created with the target counter at `value` and the
    /// other at 0; an existing row has only the target counter replaced.
    /// Range validation is the caller's responsibility -- the command
    /// boundary only produces non-negative values.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the upsert fails.
    pub async fn set(&self, id: PlayerId, kind: CounterKind, value: u64) -> Result<(), DbError> {
        let sql = match kind {
            CounterKind::Mined => {
                r"INSERT INTO player_stats (uuid, mined, placed) VALUES (?1, ?2, 0)
                  ON CONFLICT(uuid) DO UPDATE SET mined = excluded.mined"
            }
            CounterKind::Placed => {
                r"INSERT INTO player_stats (uuid, mined, placed) VALUES (?1, 0, ?2)
                  ON CONFLICT(uuid) DO UPDATE SET placed = excluded.placed"
            }
        };

        sqlx::query(sql)
            .bind(id.to_string())
            .bind(i64::try_from(value).unwrap_or(i64::MAX))
            .execute(self.pool)
            .await?;

        tracing::debug!(player = %id, counter = %kind, value, "Set counter");
        Ok(())
    }

    /// Read the counters for `id`.
    ///
    /// A player with no stored row reads as `(0, 0)`; the read does not
    /// create a row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn get(&self, id: PlayerId) -> Result<PlayerCounters, DbError> {
        let row = sqlx::query_as::<_, CountersRow>(
            r"SELECT mined, placed FROM player_stats WHERE uuid = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map_or_else(PlayerCounters::default, CountersRow::into_counters))
    }
}

/// A row from the `player_stats` table.
///
/// SQLite integers are signed; the counter model is not. Values are
/// clamped at the boundary so an out-of-model row cannot produce a
/// negative counter.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
struct CountersRow {
    /// Blocks mined.
    mined: i64,
    /// Blocks placed.
    placed: i64,
}

impl CountersRow {
    /// Convert to the non-negative counter model.
    fn into_counters(self) -> PlayerCounters {
        PlayerCounters {
            mined: u64::try_from(self.mined).unwrap_or(0),
            placed: u64::try_from(self.placed).unwrap_or(0),
        }
    }
}
