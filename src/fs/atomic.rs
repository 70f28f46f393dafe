//! Atomic filesystem writes.
//!
//! All atomic writes follow this pattern:
//! 1. Write content to a temporary sibling file (`<stem>.tmp`)
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temporary file over the target
//! 4. Sync the parent directory (Unix)
//!
//! `rename()` is atomic only when source and destination share a filesystem,
//! which holds because the temporary file lives next to the target.
//!
//! If the process dies between steps 2 and 3 the target is untouched and a
//! stale temporary file is left behind; the next write truncates it.
//!
//! The temporary name is fixed, so concurrent writers of the same target must
//! be serialized by the caller (see [`crate::locks`]).

use crate::error::{CounterError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extension used for the temporary sibling of a target file.
pub const TEMP_EXTENSION: &str = "tmp";

/// Atomically write bytes to a file, creating parent directories if absent.
///
/// ```no_run
/// use counter_service::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("/data/counter.json"), br#"{"counter":1}"#)?;
/// # Ok::<(), counter_service::error::CounterError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| CounterError::io("create parent directory", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Path of the temporary sibling used while writing `target`.
pub fn temp_path_for(target: &Path) -> PathBuf {
    sibling_with_extension(target, TEMP_EXTENSION)
}

/// `target` with its extension replaced by `extension`, or with `.{extension}`
/// appended when it already has that extension.
pub fn sibling_with_extension(target: &Path, extension: &str) -> PathBuf {
    if target.extension().is_some_and(|ext| ext == extension) {
        let mut name = target.as_os_str().to_owned();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    } else {
        target.with_extension(extension)
    }
}

/// Write content to a file and sync it to disk.
pub(crate) fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).map_err(|e| CounterError::io("create temporary file", path, e))?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        CounterError::io("write temporary file", path, e)
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        CounterError::io("sync temporary file", path, e)
    })
}

/// Replace `target` with `source` in a single rename.
fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        CounterError::io("atomically replace", target, e)
    })?;

    sync_parent_dir(target);
    Ok(())
}

/// Persist the directory entry of `target`; failure here still leaves a valid file.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("counter.json");

        atomic_write(&file_path, b"hello world").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("counter.json");
        fs::write(&file_path, "original content").unwrap();

        atomic_write(&file_path, b"new content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("dirs").join("counter.json");

        atomic_write(&file_path, b"nested content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "nested content");
    }

    #[test]
    fn test_atomic_write_temp_file_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("counter.json");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join("counter.tmp").exists());
    }

    #[test]
    fn test_atomic_write_overwrites_stale_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("counter.json");
        fs::write(temp_dir.path().join("counter.tmp"), "leftover from a crash, longer").unwrap();

        atomic_write(&file_path, b"fresh").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh");
        assert!(!temp_dir.path().join("counter.tmp").exists());
    }

    #[test]
    fn test_interrupted_write_leaves_target_intact() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("counter.json");
        fs::write(&file_path, "original").unwrap();

        // Crash after the temp file is durable but before the rename.
        write_and_sync(&temp_path_for(&file_path), b"never published").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let target = Path::new("/some/path/counter.json");
        let temp = temp_path_for(target);

        assert_eq!(temp, Path::new("/some/path/counter.tmp"));
    }

    #[test]
    fn test_temp_path_never_aliases_target() {
        let target = Path::new("/data/counter.tmp");

        assert_eq!(temp_path_for(target), Path::new("/data/counter.tmp.tmp"));
    }

    #[test]
    fn test_atomic_write_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = atomic_write(blocker.join("counter.json"), b"x");

        assert!(matches!(result, Err(CounterError::Io { .. })));
    }
}
