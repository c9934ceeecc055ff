//! Display rotation state machine for the scoreboard.
//!
//! The board alternates between the two counters on a fixed tick interval
//! (default 100 ticks, five seconds at 20 ticks per second). The tick
//! counter is the only state that advances; the displayed metric flips
//! exactly when the counter reaches the interval and the counter resets
//! to zero on every flip.

use blockstats_types::CounterKind;

/// Errors that can occur constructing a rotation.
#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    /// The flip interval must be at least one tick.
    #[error("invalid rotation interval: {reason}")]
    InvalidInterval {
        /// Explanation of what is wrong with the interval.
        reason: String,
    },
}

/// Rotation state: which metric is on display and how close the next
/// flip is.
///
/// Invariants: the tick counter is always in `[0, interval)`; the metric
/// flips exactly every `interval` calls to [`advance`] and the counter
/// resets to zero on flip. The initial metric is [`CounterKind::Mined`].
///
/// [`advance`]: BoardRotation::advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRotation {
    /// Metric currently on display.
    metric: CounterKind,

    /// Ticks counted toward the next flip.
    ticks: u64,

    /// Number of ticks between flips.
    interval: u64,
}

impl BoardRotation {
    /// Create a rotation that flips every `interval` ticks, starting on
    /// [`CounterKind::Mined`] with the tick counter at zero.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidInterval`] if `interval` is zero.
    pub fn new(interval: u64) -> Result<Self, RotationError> {
        if interval == 0 {
            return Err(RotationError::InvalidInterval {
                reason: "interval must be at least 1 tick".to_owned(),
            });
        }

        Ok(Self {
            metric: CounterKind::Mined,
            ticks: 0,
            interval,
        })
    }

    /// Create a rotation from explicit state (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidInterval`] if `interval` is zero or
    /// `ticks` is not below it.
    pub fn from_parts(
        metric: CounterKind,
        ticks: u64,
        interval: u64,
    ) -> Result<Self, RotationError> {
        if interval == 0 {
            return Err(RotationError::InvalidInterval {
                reason: "interval must be at least 1 tick".to_owned(),
            });
        }
        if ticks >= interval {
            return Err(RotationError::InvalidInterval {
                reason: format!("tick counter {ticks} must be below interval {interval}"),
            });
        }
        Ok(Self {
            metric,
            ticks,
            interval,
        })
    }

    /// Advance by one tick. Returns `true` when the metric flipped.
    pub const fn advance(&mut self) -> bool {
        self.ticks = self.ticks.saturating_add(1);
        if self.ticks >= self.interval {
            self.ticks = 0;
            self.metric = self.metric.other();
            true
        } else {
            false
        }
    }

    /// Metric currently on display.
    pub const fn metric(&self) -> CounterKind {
        self.metric
    }

    /// Ticks counted toward the next flip, always below the interval.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of ticks between flips.
    pub const fn interval(&self) -> u64 {
        self.interval
    }
}
