//! Cross-process mutual exclusion for the counter file.
//!
//! Increments are serialized with an advisory `flock(2)`-style exclusive lock
//! on a *lock handle*: a file next to the counter whose extension is replaced
//! with `.lock` (`/data/counter.json` -> `/data/counter.lock`). The handle has
//! no content; only its lock state matters.
//!
//! # Semantics
//!
//! - Cross-process: every process (or container) pointed at the same volume
//!   contends on the same handle. Threads within one process contend too,
//!   because each acquisition opens its own file description.
//! - Blocking: acquisition waits until the lock is free. No timeout, no
//!   fairness beyond what the OS provides.
//! - Scoped: [`LockGuard`] releases on drop, so every exit path of the
//!   critical section (early return, error, panic) unlocks.
//!
//! The handle is never deleted. Removing a locked file would let the next
//! process lock a fresh inode while the old holder still runs.

mod guard;


pub use guard::LockGuard;

use crate::error::{CounterError, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Extension of the lock handle derived from a counter path.
pub const LOCK_EXTENSION: &str = "lock";

/// Path of the lock handle guarding `target`.
///
/// A target that already ends in `.lock` gets the extension appended instead,
/// so the handle never aliases the counter file.
pub fn lock_path_for(target: &Path) -> PathBuf {
    crate::fs::sibling_with_extension(target, LOCK_EXTENSION)
}

/// Block until the exclusive lock guarding `target` is held.
///
/// Creates the lock handle's parent directory if absent.
pub fn acquire_exclusive(target: &Path) -> Result<LockGuard> {
    let lock_path = lock_path_for(target);

    if let Some(parent) = lock_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| CounterError::io("create lock directory", parent, e))?;
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| CounterError::io("open lock handle", &lock_path, e))?;

    file.lock_exclusive().map_err(|e| {
        CounterError::Lock(format!(
            "failed to lock '{}': {}",
            lock_path.display(),
            e
        ))
    })?;

    Ok(LockGuard::new(file, lock_path))
}

/// Run `body` while holding the exclusive lock guarding `target`.
///
/// The lock is released on every exit path, including an `Err` from `body`
/// or a panic unwinding through it.
pub fn with_exclusive_lock<T, F>(target: &Path, body: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let _guard = acquire_exclusive(target)?;
    body()
}
