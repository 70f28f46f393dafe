//! counter-service: a persistent counter behind a minimal HTTP API.
//!
//! Parses arguments, loads configuration from the environment once,
//! installs the JSON logger and dispatches to the selected command.

mod cli;
mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod http;
pub mod locks;
pub mod logging;
pub mod store;

use cli::Cli;
use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = Config::from_env().and_then(|config| {
        logging::init(config.log_level)?;
        commands::dispatch(cli.selected_command(), config)
    });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
