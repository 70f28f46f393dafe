//! Persistent counter store.
//!
//! The counter lives in a single JSON document, `{"counter": <u64>}`. Every
//! call goes to disk; nothing is cached, since surviving a restart is the
//! whole point.
//!
//! Reads are fail-open: a missing file is zero, and a file that cannot be read
//! or parsed is also zero, with a `read_failed` warning. A corrupt file is
//! therefore indistinguishable from a fresh one to callers, and the next
//! increment overwrites it.
//!
//! Writes go through [`crate::fs::atomic_write`], so a concurrent reader sees
//! either the old document or the new one, never a prefix.


use crate::error::{CounterError, Result};
use crate::events;
use crate::fs::atomic_write;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// On-disk shape of the counter file. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterDocument {
    pub counter: u64,
}

/// Read the counter stored at `path`.
///
/// Never fails: absence yields 0 silently, any other problem yields 0 and a
/// `read_failed` warning.
pub fn read(path: &Path) -> u64 {
    match load(path) {
        Ok(Some(doc)) => doc.counter,
        Ok(None) => 0,
        Err(e) => {
            events::read_failed(path, &e);
            0
        }
    }
}

/// Durably replace the counter stored at `path` with `value`.
///
/// Creates parent directories if absent.
pub fn write(path: &Path, value: u64) -> Result<()> {
    let content = serde_json::to_vec(&CounterDocument { counter: value })
        .map_err(|e| CounterError::Serialize(e.to_string()))?;
    atomic_write(path, &content)
}

/// Load the document at `path`, distinguishing absence from corruption.
pub fn load(path: &Path) -> Result<Option<CounterDocument>> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(CounterError::io("read counter file", path, e)),
    };

    serde_json::from_slice(&content)
        .map(Some)
        .map_err(|e| CounterError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
