//! Error types for walkv
//!
//! Provides a unified error type for all operations.
//!
//! Only real I/O failures surface as errors. An absent key is a normal
//! `None`/no-op result, a missing snapshot or log file is the expected
//! first-run state, and a malformed trailing record during replay is
//! reported through [`crate::wal::ReplayStats`] rather than raised.

use thiserror::Error;

/// Result type alias using WalkvError
pub type Result<T> = std::result::Result<T, WalkvError>;

/// Unified error type for walkv operations
#[derive(Debug, Error)]
pub enum WalkvError {
    /// Underlying file read/write/open failed for a reason other than
    /// "file does not exist" (permission denied, disk full, ...).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
