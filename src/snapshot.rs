//! Snapshot Store
//!
//! Persists the full key-value mapping as a flat text file.
//!
//! ## File Format
//!
//! One `<key> <value>\n` line per entry, whitespace-delimited. Keys and
//! values must not contain whitespace (the format has no escaping); entry
//! order is irrelevant.
//!
//! ## Crash Consistency
//!
//! `save` never rewrites the target in place. It writes the whole mapping
//! to a temporary sibling file, syncs it, and renames it over the target,
//! so a crash mid-save leaves the previous snapshot intact.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;

/// Reads and writes the persisted mapping
///
/// Owns only its file path; the file itself is opened and closed within
/// the scope of each call.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store backed by the given snapshot file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted mapping.
    ///
    /// A missing or empty file yields an empty mapping — absence of a
    /// snapshot is the expected state on first run. A line that does not
    /// parse as exactly two tokens stops the read, with a warning.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        let mut map = HashMap::new();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(map),
            Err(e) => return Err(e.into()),
        };

        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(key), Some(value), None) => {
                    map.insert(key.to_string(), value.to_string());
                }
                _ => {
                    warn!(
                        line = line_no + 1,
                        "malformed snapshot line, stopping load; entries after this point are lost"
                    );
                    break;
                }
            }
        }

        Ok(map)
    }

    /// Persist the mapping, replacing any previous snapshot atomically.
    ///
    /// Write-temp, fsync, rename: the target either keeps its old contents
    /// or holds the complete new mapping, never a partial one.
    pub fn save(&self, map: &HashMap<String, String>) -> Result<()> {
        let tmp_path = self.tmp_path();

        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            for (key, value) in map {
                writeln!(writer, "{} {}", key, value)?;
            }
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary sibling used during `save`
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
