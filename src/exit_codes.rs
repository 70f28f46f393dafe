//! Exit code constants for the counter-service binary.
//!
//! - 0: Success
//! - 1: User error (bad configuration or arguments)
//! - 2: I/O failure while reading or persisting the counter
//! - 3: Lock acquisition failure
//! - 4: Server failure (bind, serve)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid environment configuration or arguments.
pub const USER_ERROR: i32 = 1;

/// I/O failure: the counter file or its temporary sibling could not be written.
pub const IO_FAILURE: i32 = 2;

/// Lock acquisition failure: the lock handle could not be opened or locked.
pub const LOCK_FAILURE: i32 = 3;

/// Server failure: the HTTP listener could not be bound or crashed.
pub const SERVER_FAILURE: i32 = 4;
