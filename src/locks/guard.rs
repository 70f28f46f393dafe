//! RAII lock guard implementation.

use crate::events;
use fs2::FileExt;
use std::fs::File;
use std::path::PathBuf;

/// RAII guard for an exclusive lock on a lock handle.
///
/// When dropped, the lock is released and the handle's descriptor closed.
/// If unlocking fails a warning is logged; closing the descriptor releases
/// the lock regardless.
#[derive(Debug)]
pub struct LockGuard {
    /// Open handle holding the lock.
    file: File,

    /// Path to the lock handle.
    path: PathBuf,
}

impl LockGuard {
    pub(super) fn new(file: File, path: PathBuf) -> Self {
        Self { file, path }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            events::lock_release_failed(&self.path, &e);
        }
    }
}
