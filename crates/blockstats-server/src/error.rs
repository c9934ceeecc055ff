//! Error types for the host harness binary.
//!
//! [`HostError`] is the top-level error type that wraps the failure modes
//! during startup. Runtime stats failures never surface here; the service
//! degrades instead.

/// Top-level error for the host harness binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: blockstats_core::ConfigError,
    },

    /// Board rotation initialization failed.
    #[error("rotation error: {source}")]
    Rotation {
        /// The underlying rotation error.
        #[from]
        source: blockstats_core::RotationError,
    },
}
