//! WAL record definitions
//!
//! Defines the record type and its line codec.

use std::fmt;

/// A single mutation recorded in the WAL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Insert or overwrite a key
    Put { key: String, value: String },

    /// Delete a key (no-op on replay if absent)
    Delete { key: String },
}

impl Record {
    /// Parse one log line.
    ///
    /// Returns `None` for anything that is not exactly `PUT <key> <value>`
    /// or `DEL <key>` — including extra tokens, which would desynchronize a
    /// token-stream reader.
    pub fn parse(line: &str) -> Option<Record> {
        let mut tokens = line.split_whitespace();
        match tokens.next()? {
            "PUT" => {
                let key = tokens.next()?.to_string();
                let value = tokens.next()?.to_string();
                match tokens.next() {
                    None => Some(Record::Put { key, value }),
                    Some(_) => None,
                }
            }
            "DEL" => {
                let key = tokens.next()?.to_string();
                match tokens.next() {
                    None => Some(Record::Delete { key }),
                    Some(_) => None,
                }
            }
            _ => None,
        }
    }

    /// The key this record mutates
    pub fn key(&self) -> &str {
        match self {
            Record::Put { key, .. } => key,
            Record::Delete { key } => key,
        }
    }
}

/// Renders the on-disk line form, without the trailing newline.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Put { key, value } => write!(f, "PUT {} {}", key, value),
            Record::Delete { key } => write!(f, "DEL {}", key),
        }
    }
}
