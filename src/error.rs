//! Error types for the counter service.
//!
//! Uses thiserror for derive macros. Every variant maps to both a process exit
//! code (one-shot CLI commands) and an HTTP status (request handlers).

use crate::exit_codes;
use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for counter operations.
#[derive(Error, Debug)]
pub enum CounterError {
    /// A filesystem operation on the counter, its temp sibling, or its lock failed.
    #[error("failed to {operation} '{}': {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The counter file exists but does not hold a counter document.
    #[error("corrupt counter file '{}': {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The exclusive lock could not be acquired or the guarded section was lost.
    #[error("lock acquisition failed: {0}")]
    Lock(String),

    /// The counter document could not be serialized.
    #[error("failed to serialize counter document: {0}")]
    Serialize(String),

    /// Incrementing would exceed the counter's value domain.
    #[error("counter overflow: {0} cannot be incremented")]
    Overflow(u64),

    /// Invalid environment configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A blocking worker task failed to complete.
    #[error("worker task failed: {0}")]
    Task(String),
}

impl CounterError {
    /// Build an [`CounterError::Io`] for `path`.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CounterError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CounterError::Config(_) => exit_codes::USER_ERROR,
            CounterError::Io { .. }
            | CounterError::Corrupt { .. }
            | CounterError::Serialize(_)
            | CounterError::Overflow(_) => exit_codes::IO_FAILURE,
            CounterError::Lock(_) => exit_codes::LOCK_FAILURE,
            CounterError::Task(_) => exit_codes::SERVER_FAILURE,
        }
    }

    /// Returns the HTTP status a request failing with this error responds with.
    ///
    /// No variant is caused by the request itself, so all are server errors.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Result type alias for counter operations.
pub type Result<T> = std::result::Result<T, CounterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_error_has_user_exit_code() {
        let err = CounterError::Config("bad LOG_LEVEL".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_io_exit_code() {
        let err = CounterError::io(
            "write",
            "/data/counter.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn lock_error_has_lock_exit_code() {
        let err = CounterError::Lock("busy".to_string());
        assert_eq!(err.exit_code(), exit_codes::LOCK_FAILURE);
    }

    #[test]
    fn every_error_is_a_server_error() {
        let errors = [
            CounterError::Lock("x".to_string()),
            CounterError::Overflow(u64::MAX),
            CounterError::Task("panicked".to_string()),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = CounterError::io(
            "create temporary file",
            "/data/counter.tmp",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert_eq!(
            err.to_string(),
            "failed to create temporary file '/data/counter.tmp': disk full"
        );

        let err = CounterError::Overflow(u64::MAX);
        assert_eq!(
            err.to_string(),
            format!("counter overflow: {} cannot be incremented", u64::MAX)
        );
    }
}
