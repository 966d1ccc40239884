//! Structured event logging
//!
//! One log line = one JSON event, written synchronously with deterministic
//! key ordering. Events go to stderr so that stdout stays reserved for
//! command output.

mod logger;

pub use logger::{Logger, Severity};
