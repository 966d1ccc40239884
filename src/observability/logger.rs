//! Structured JSON logger
//!
//! Contract:
//! - one log line = one event
//! - synchronous, no buffering
//! - deterministic key ordering

use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// A synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Logs an event with string fields to stderr.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut stderr = io::stderr();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }

    /// Renders one event as a single JSON line.
    ///
    /// The underlying map is key-sorted, so the output is deterministic for
    /// a given field set.
    pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut object = Map::new();
        object.insert("event".to_string(), Value::String(event.to_string()));
        object.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        for (key, value) in fields {
            object.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        let mut line = Value::Object(object).to_string();
        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_event_is_one_json_line() {
        let line = Logger::render(Severity::Info, "reservation_created", &[]);
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        let parsed: Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["event"], "reservation_created");
        assert_eq!(parsed["severity"], "INFO");
    }

    #[test]
    fn test_key_order_is_deterministic() {
        let a = Logger::render(
            Severity::Info,
            "guest_checked_in",
            &[("room_key", "abc"), ("localizer", "def")],
        );
        let b = Logger::render(
            Severity::Info,
            "guest_checked_in",
            &[("localizer", "def"), ("room_key", "abc")],
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_are_escaped_as_json() {
        let line = Logger::render(Severity::Error, "failure", &[("reason", "a \"b\" c")]);
        let parsed: Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["reason"], "a \"b\" c");
    }
}
