//! Structured log events for the counter service.
//!
//! Every operationally meaningful occurrence is emitted as a tracing event with
//! a stable `event` name and the emitting process id, so one JSON line on stdout
//! is one event (see [`crate::logging`]).
//!
//! # Event Names
//!
//! - `read_failed`: the counter file exists but could not be read or parsed
//! - `increment`: an increment completed; carries the new `counter`
//! - `lock_release_failed`: unlocking the lock handle returned an error
//! - `request_failed`: an HTTP request ended with a server error
//! - `server_started` / `server_stopped`: HTTP server lifecycle

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::Path;

/// Names of the events the service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    ReadFailed,
    Increment,
    LockReleaseFailed,
    RequestFailed,
    ServerStarted,
    ServerStopped,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventAction::ReadFailed => "read_failed",
            EventAction::Increment => "increment",
            EventAction::LockReleaseFailed => "lock_release_failed",
            EventAction::RequestFailed => "request_failed",
            EventAction::ServerStarted => "server_started",
            EventAction::ServerStopped => "server_stopped",
        }
    }
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The counter file could not be read; the caller proceeds with zero.
pub fn read_failed(path: &Path, error: &dyn Display) {
    tracing::warn!(
        event = EventAction::ReadFailed.as_str(),
        pid = std::process::id(),
        path = %path.display(),
        error = %error
    );
}

/// An increment committed `counter` to disk.
pub fn increment(counter: u64) {
    tracing::info!(
        event = EventAction::Increment.as_str(),
        pid = std::process::id(),
        counter = counter
    );
}

/// Unlocking the lock handle at `path` failed. The descriptor is closed anyway.
pub fn lock_release_failed(path: &Path, error: &dyn Display) {
    tracing::warn!(
        event = EventAction::LockReleaseFailed.as_str(),
        pid = std::process::id(),
        path = %path.display(),
        error = %error
    );
}

pub fn request_failed(error: &dyn Display) {
    tracing::error!(
        event = EventAction::RequestFailed.as_str(),
        pid = std::process::id(),
        error = %error
    );
}

pub fn server_started(addr: SocketAddr, version: &str, counter_file: &Path) {
    tracing::info!(
        event = EventAction::ServerStarted.as_str(),
        pid = std::process::id(),
        addr = %addr,
        version = version,
        counter_file = %counter_file.display()
    );
}

pub fn server_stopped() {
    tracing::info!(
        event = EventAction::ServerStopped.as_str(),
        pid = std::process::id()
    );
}
