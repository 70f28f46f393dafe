//! Config struct definition and environment loading.

use crate::error::{CounterError, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_COUNTER_FILE: &str = "/data/counter.json";
pub const DEFAULT_APP_VERSION: &str = "dev";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Configuration for the counter service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the persisted counter JSON file (`COUNTER_FILE`).
    pub counter_file: PathBuf,

    /// Value returned by `GET /version` (`APP_VERSION`).
    pub app_version: String,

    /// Minimum severity emitted to the log (`LOG_LEVEL`).
    pub log_level: Level,

    /// Address the HTTP server binds to (`LISTEN_ADDR`).
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counter_file: PathBuf::from(DEFAULT_COUNTER_FILE),
            app_version: DEFAULT_APP_VERSION.to_string(),
            log_level: Level::INFO,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unset and empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let counter_file = get("COUNTER_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTER_FILE));

        let app_version = get("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.to_string());

        let log_level = get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_level = parse_log_level(&log_level)?;

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr.trim().parse().map_err(|e| {
            CounterError::Config(format!(
                "LISTEN_ADDR '{}' is not a socket address: {}",
                listen_addr, e
            ))
        })?;

        Ok(Self {
            counter_file,
            app_version,
            log_level,
            listen_addr,
        })
    }
}

/// Parse a case-insensitive level name.
///
/// Accepts `TRACE`, `DEBUG`, `INFO`, `WARN`/`WARNING` and `ERROR`/`CRITICAL`.
pub fn parse_log_level(value: &str) -> Result<Level> {
    match value.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Ok(Level::TRACE),
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARN" | "WARNING" => Ok(Level::WARN),
        "ERROR" | "CRITICAL" => Ok(Level::ERROR),
        other => Err(CounterError::Config(format!(
            "LOG_LEVEL '{}' is not one of TRACE, DEBUG, INFO, WARNING, ERROR, CRITICAL",
            other
        ))),
    }
}
