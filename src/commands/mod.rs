//! Command implementations for counter-service.

use crate::cli::Command;
use crate::config::Config;
use crate::counter;
use crate::error::{CounterError, Result};
use crate::http;
use serde_json::json;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Serve => cmd_serve(config),
        Command::Get => cmd_get(&config),
        Command::Increment => cmd_increment(&config),
    }
}

fn cmd_serve(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CounterError::Task(format!("failed to start runtime: {}", e)))?;

    runtime
        .block_on(http::serve(config))
        .map_err(|e| CounterError::Task(format!("{:#}", e)))
}

fn cmd_get(config: &Config) -> Result<()> {
    print_counter(counter::current(&config.counter_file));
    Ok(())
}

fn cmd_increment(config: &Config) -> Result<()> {
    print_counter(counter::increment(&config.counter_file)?);
    Ok(())
}

fn print_counter(value: u64) {
    println!("{}", json!({ "counter": value }));
}
