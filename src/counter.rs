//! Counter operations: the locked increment and the unlocked read.
//!
//! Increments are a single critical section under the counter's lock handle:
//! read, add one, write. They are totally ordered across every thread and
//! process sharing the file. Reads take no lock; they may observe a value one
//! increment behind, but never a torn document.

use crate::error::{CounterError, Result};
use crate::events;
use crate::locks::with_exclusive_lock;
use crate::store;
use std::path::Path;

/// Increment the counter at `path` and return the new value.
///
/// Blocks until the exclusive lock is free. The `increment` event is logged
/// after the lock is released.
pub fn increment(path: &Path) -> Result<u64> {
    let next = with_exclusive_lock(path, || {
        let current = store::read(path);
        let next = current
            .checked_add(1)
            .ok_or(CounterError::Overflow(current))?;
        store::write(path, next)?;
        Ok(next)
    })?;

    events::increment(next);
    Ok(next)
}

/// Current value of the counter at `path`, without locking.
pub fn current(path: &Path) -> u64 {
    store::read(path)
}
