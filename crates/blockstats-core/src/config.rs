//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `blockstats.yaml` next to the
//! server. This module defines strongly-typed structs that mirror the
//! YAML structure, with per-field defaults so an empty (or missing
//! section) file yields a working setup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use blockstats_db::SqliteConfig;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration for the blockstats service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatsConfig {
    /// Durable store settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Rotating board settings.
    #[serde(default)]
    pub board: BoardConfig,
}

impl StatsConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `BLOCKSTATS_DB` environment variable overrides
    /// `database.path`, so deployments can relocate the store without
    /// editing the YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.database.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.database.apply_env_overrides();
        Ok(config)
    }
}

/// Durable store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file. Created if missing.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl DatabaseConfig {
    /// Override the database path with `BLOCKSTATS_DB` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BLOCKSTATS_DB") {
            self.path = PathBuf::from(val);
        }
    }

    /// Build the pool configuration for [`blockstats_db`].
    pub fn sqlite_config(&self) -> SqliteConfig {
        SqliteConfig::new(self.path.as_path())
            .with_max_connections(self.max_connections)
            .with_connect_timeout(Duration::from_millis(self.connect_timeout_ms))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

/// Rotating board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Ticks between metric flips.
    #[serde(default = "default_switch_interval_ticks")]
    pub switch_interval_ticks: u64,

    /// Real-time milliseconds per scheduled tick (50 ms is the host's
    /// 20 ticks per second).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl BoardConfig {
    /// The tick period as a [`Duration`].
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            switch_interval_ticks: default_switch_interval_ticks(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("statistics.db")
}

const fn default_max_connections() -> u32 {
    1
}

const fn default_connect_timeout_ms() -> u64 {
    5000
}

const fn default_switch_interval_ticks() -> u64 {
    100
}

const fn default_tick_interval_ms() -> u64 {
    50
}
