//! Write-Ahead Log (WAL) Module
//!
//! Provides durability guarantees through append-only logging.
//!
//! ## Responsibilities
//! - Append a log record before any mutation is acknowledged
//! - Replay records in append order during recovery
//! - Truncate after a successful checkpoint
//!
//! ## File Format
//!
//! One text record per line, append-only until truncated:
//!
//! ```text
//! PUT <key> <value>\n
//! DEL <key>\n
//! ```
//!
//! Keys and values are whitespace-delimited tokens and therefore must not
//! contain whitespace themselves; the format has no escaping. Replay order
//! is the only order that matters: each record is applied exactly once, in
//! append order.

mod reader;
mod record;
mod writer;

pub use reader::{ReplayStats, WalReader};
pub use record::Record;
pub use writer::WalWriter;
