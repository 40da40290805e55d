//! Engine Module
//!
//! The core store that coordinates all components.
//!
//! ## Responsibilities
//! - Own the authoritative in-memory mapping
//! - Handle concurrent read/write access
//! - Append to the WAL before acknowledging any mutation
//! - Manage recovery on startup and checkpointing on demand

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::snapshot::SnapshotStore;
use crate::wal::{WalReader, WalWriter};

/// State behind the engine's lock.
///
/// The WAL writer lives inside the lock alongside the mapping, so the
/// exclusive guard taken by mutations covers both the in-memory change and
/// the corresponding log I/O. A reader can therefore never observe a state
/// whose log record has not yet been appended.
struct Inner {
    /// The authoritative key-value mapping
    map: HashMap<String, String>,

    /// Write-ahead log, appended before every acknowledged mutation
    wal: WalWriter,
}

/// The key-value store engine
///
/// ## Concurrency Model: Shared-Reader / Exclusive-Writer
///
/// - **Reads** (`get`): shared lock — any number run concurrently
/// - **Writes** (`put`/`remove`/`checkpoint`): exclusive lock — one at a
///   time, never concurrent with a reader
///
/// All operations are synchronous and may block on file I/O. A blocked
/// thread waits indefinitely for the lock; there are no timeouts and no
/// cancellation.
///
/// Two engine instances must never point at the same file pair — this is
/// not enforced, it is an invariant the caller owns.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Snapshot store (owns only its file path)
    snapshot: SnapshotStore,

    /// Mapping + WAL writer behind one readers-writer lock
    inner: RwLock<Inner>,
}

impl Engine {
    /// Open or create a store with the given config.
    ///
    /// Recovery runs once, synchronously, in here:
    /// 1. Load the snapshot (missing file = empty mapping)
    /// 2. Replay the WAL on top of it, in append order
    /// 3. Open the WAL append handle; ready to serve
    ///
    /// Fails with [`crate::WalkvError::Io`] only if a file exists but is
    /// unreadable; missing files are the expected first-run state.
    pub fn open(config: Config) -> Result<Self> {
        // The files may live in directories that don't exist yet.
        for path in [&config.snapshot_path, &config.log_path] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }

        let snapshot = SnapshotStore::new(&config.snapshot_path);

        // Step 1: snapshot state as of the last checkpoint
        let mut map = snapshot.load()?;
        let snapshot_entries = map.len();

        // Step 2: everything logged since that checkpoint
        let stats = WalReader::open(&config.log_path)?.replay_into(&mut map)?;

        if snapshot_entries > 0 || stats.records_applied > 0 {
            info!(
                snapshot_entries,
                wal_records = stats.records_applied,
                live_keys = map.len(),
                "recovery complete"
            );
        }
        if stats.stopped_at_malformed {
            warn!("WAL replay stopped at a malformed record; recovered state may be incomplete");
        }

        // Step 3: all future mutations append here
        let wal = WalWriter::open(&config.log_path)?;

        Ok(Self {
            config,
            snapshot,
            inner: RwLock::new(Inner { map, wal }),
        })
    }

    /// Open with a data directory (convenience method)
    ///
    /// Uses the default file names under the given directory.
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(Config::in_dir(dir))
    }

    /// Insert or overwrite a key-value pair.
    ///
    /// The WAL record is appended and synced before the in-memory mapping
    /// changes, so an acknowledged write is never lost to a crash.
    ///
    /// Keys and values must not contain whitespace; the text formats have
    /// no escaping.
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.write();

        inner.wal.append_put(key, value)?;
        inner.map.insert(key.to_string(), value.to_string());

        Ok(())
    }

    /// Get the value for a key.
    ///
    /// Absence is a normal, expected outcome, not an error.
    pub fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.read();
        inner.map.get(key).cloned()
    }

    /// Delete a key.
    ///
    /// A no-op on the mapping if the key is absent; the `DEL` record is
    /// appended either way (replaying it is also a no-op).
    pub fn remove(&self, key: &str) -> Result<()> {
        let mut inner = self.inner.write();

        inner.wal.append_delete(key)?;
        inner.map.remove(key);

        Ok(())
    }

    /// Persist the current state to the snapshot and discard the log.
    ///
    /// Runs under the exclusive lock, so no put/remove is in flight while
    /// the snapshot is written. Once this returns, the snapshot alone
    /// reproduces the current state and recovery cost is back to zero.
    pub fn checkpoint(&self) -> Result<()> {
        let mut inner = self.inner.write();

        // Snapshot first: the log may only be discarded once the saved
        // state safely covers everything in it.
        self.snapshot.save(&inner.map)?;
        inner.wal.truncate()?;

        info!(live_keys = inner.map.len(), "checkpoint complete");

        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.inner.read().map.len()
    }

    /// True if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.inner.read().map.is_empty()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
