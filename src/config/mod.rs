//! Process-wide configuration.
//!
//! Configuration is read from the environment exactly once, at startup, and is
//! immutable afterwards. Request handlers receive it through shared state; they
//! never consult the environment themselves.

mod model;


pub use model::{Config, parse_log_level};
