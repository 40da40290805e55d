//! WAL Writer
//!
//! Handles appending records to the WAL file.
//!
//! One append-mode handle is kept open for the writer's lifetime; every
//! append writes the full line and then syncs file data, so a record is
//! durable before the call returns.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Record;

/// Appends records to the WAL file
pub struct WalWriter {
    /// Append-mode handle, held for the writer's lifetime
    file: File,

    /// Path of the log file (needed to reopen on truncate)
    path: PathBuf,
}

impl WalWriter {
    /// Open or create a WAL file for appending
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Append one record and sync it to disk
    pub fn append(&mut self, record: &Record) -> Result<()> {
        // Single write_all call so the line is never interleaved or torn
        // at the application level.
        let line = format!("{}\n", record);
        self.file.write_all(line.as_bytes())?;

        // Durable before acknowledged: data must reach the disk, not just
        // the page cache, before the mutation is confirmed to the caller.
        self.file.sync_data()?;

        Ok(())
    }

    /// Append a `PUT <key> <value>` record
    pub fn append_put(&mut self, key: &str, value: &str) -> Result<()> {
        self.append(&Record::Put {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Append a `DEL <key>` record
    pub fn append_delete(&mut self, key: &str) -> Result<()> {
        self.append(&Record::Delete {
            key: key.to_string(),
        })
    }

    /// Empty the log file.
    ///
    /// Used only immediately after a successful checkpoint, once the
    /// snapshot alone reproduces the current state.
    pub fn truncate(&mut self) -> Result<()> {
        // Recreating the file truncates it and replaces the append handle
        // in one step.
        self.file = File::create(&self.path)?;
        self.file.sync_data()?;

        // Keep the handle in append mode for subsequent writes.
        self.file = OpenOptions::new().append(true).open(&self.path)?;

        Ok(())
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
