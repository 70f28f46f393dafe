//! CLI argument parsing for counter-service.
//!
//! Uses clap derive macros. All runtime configuration comes from the
//! environment (see [`crate::config`]); the CLI only selects what to run.

use clap::{Parser, Subcommand};

/// Counter service: a persistent counter behind a tiny HTTP API.
///
/// The counter lives in a JSON file (`COUNTER_FILE`). Increments are
/// serialized across processes with an exclusive lock on a sibling
/// `.lock` file, so replicas sharing a volume never lose updates.
#[derive(Parser, Debug)]
#[command(name = "counter-service")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands. With none given, `serve` runs.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server on `LISTEN_ADDR`.
    Serve,

    /// Print the current counter without locking.
    Get,

    /// Increment the counter under the exclusive lock and print the new value.
    Increment,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to `serve`.
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
