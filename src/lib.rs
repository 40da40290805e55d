//! # walkv
//!
//! An embedded key-value store with:
//! - Write-Ahead Logging (WAL) for durability
//! - Flat-file snapshots with atomic checkpointing
//! - Crash recovery (snapshot load + WAL replay)
//! - Shared-reader/exclusive-writer concurrency model
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Engine                    │
//! │     (RwLock: shared get / exclusive put)    │
//! └──────────┬──────────────────────┬───────────┘
//!            │                      │
//!            ▼                      ▼
//!     ┌─────────────┐        ┌─────────────┐
//!     │     WAL     │        │  Snapshot   │
//!     │  (append)   │        │ (checkpoint)│
//!     └─────────────┘        └─────────────┘
//! ```
//!
//! On startup the engine loads the snapshot, replays the WAL on top of it,
//! and is then ready to serve. Every mutation is appended to the WAL and
//! synced before the call returns. A checkpoint rewrites the snapshot from
//! the current in-memory state (via an atomic rename) and empties the WAL,
//! bounding future recovery time.
//!
//! ## Example
//!
//! ```no_run
//! use walkv::Engine;
//!
//! # fn main() -> walkv::Result<()> {
//! let db = Engine::open_dir("./data")?;
//! db.put("name", "Alice")?;
//! assert_eq!(db.get("name"), Some("Alice".to_string()));
//! db.checkpoint()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod engine;
pub mod snapshot;
pub mod wal;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use engine::Engine;
pub use error::{Result, WalkvError};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of walkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
