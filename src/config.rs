//! Configuration for walkv
//!
//! Centralized configuration with sensible defaults.

use std::path::{Path, PathBuf};

/// Default snapshot file name used by [`Config::in_dir`].
pub const SNAPSHOT_FILENAME: &str = "snapshot.db";

/// Default WAL file name used by [`Config::in_dir`].
pub const WAL_FILENAME: &str = "wal.log";

/// Main configuration for a walkv instance
///
/// The two files may live anywhere; [`Config::in_dir`] derives both from a
/// single data directory:
/// ```text
///   {data_dir}/
///     ├── snapshot.db    (flat-file snapshot, rewritten on checkpoint)
///     └── wal.log        (write-ahead log, truncated on checkpoint)
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the snapshot file
    pub snapshot_path: PathBuf,

    /// Path of the write-ahead log file
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::in_dir("./walkv_data")
    }
}

impl Config {
    /// Config with both files under `dir`, using the default file names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            snapshot_path: dir.join(SNAPSHOT_FILENAME),
            log_path: dir.join(WAL_FILENAME),
        }
    }

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the snapshot file path
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = path.into();
        self
    }

    /// Set the write-ahead log file path
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
