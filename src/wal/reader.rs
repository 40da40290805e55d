//! WAL Reader
//!
//! Reads records back from the WAL file and replays them onto a mapping.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::error::Result;

use super::Record;

/// Outcome of a replay pass
///
/// Replay never fails on bad content — recovery is best-effort over
/// trailing garbage — but it must not be silent about it either. Callers
/// inspect this to learn whether the log was replayed in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayStats {
    /// Number of records applied to the mapping
    pub records_applied: u64,

    /// True if the read stopped early at an unparseable line
    pub stopped_at_malformed: bool,
}

/// Reads records from a WAL file
pub struct WalReader {
    /// None when the log file does not exist (expected on first run)
    reader: Option<BufReader<File>>,
}

impl WalReader {
    /// Open a WAL file for reading.
    ///
    /// A missing file is not an error: it yields a reader with no records.
    pub fn open(path: &Path) -> Result<Self> {
        let reader = match File::open(path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self { reader })
    }

    /// Replay every record onto `map`, in append order.
    ///
    /// `PUT` sets the key, `DEL` removes it (no-op if absent). Blank lines
    /// are skipped. The first malformed line stops the read; everything
    /// after it is ignored, and the stop is surfaced both in the returned
    /// stats and as a `tracing` warning.
    pub fn replay_into(self, map: &mut HashMap<String, String>) -> Result<ReplayStats> {
        let mut stats = ReplayStats::default();

        let reader = match self.reader {
            Some(reader) => reader,
            None => return Ok(stats),
        };

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match Record::parse(&line) {
                Some(Record::Put { key, value }) => {
                    map.insert(key, value);
                    stats.records_applied += 1;
                }
                Some(Record::Delete { key }) => {
                    map.remove(&key);
                    stats.records_applied += 1;
                }
                None => {
                    warn!(
                        line = line_no + 1,
                        "malformed WAL record, stopping replay; records after this point are lost"
                    );
                    stats.stopped_at_malformed = true;
                    break;
                }
            }
        }

        Ok(stats)
    }
}
