//! Whole-file JSON record store
//!
//! Records are flat JSON objects held in a single array per store. Appends
//! rewrite the entire file; a store is only rewritten once every check for
//! the current operation has passed in memory, so a failed operation never
//! commits a partial write.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::errors::{StoreError, StoreResult};

/// One append-only store backed by a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Short name used in error messages
    name: &'static str,
    /// File path; explicit configuration, never a global
    path: PathBuf,
}

impl JsonStore {
    /// Store named `name` backed by the file at `path`.
    pub fn new(name: &'static str, path: PathBuf) -> Self {
        Self { name, path }
    }

    /// Short name of this store.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the persisted records, or an empty sequence if the store has
    /// not been created yet.
    pub fn load_or_empty(&self) -> StoreResult<Vec<Value>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => self.parse(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Returns the persisted records, failing if the store does not exist.
    pub fn load_required(&self) -> StoreResult<Vec<Value>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => self.parse(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::Missing {
                store: self.name.to_string(),
            }),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Appends `record` unless any existing record matches its projection on
    /// one of `unique_keys`; nothing is written when a conflict is found.
    pub fn append_unique(&self, record: Value, unique_keys: &[&str]) -> StoreResult<()> {
        let mut records = self.load_or_empty()?;
        for existing in &records {
            for key in unique_keys {
                if existing.get(*key).is_some() && existing.get(*key) == record.get(*key) {
                    return Err(StoreError::Duplicate {
                        key: (*key).to_string(),
                    });
                }
            }
        }
        records.push(record);
        self.persist(&records)
    }

    /// Linear scan for the record whose `key` field equals `value`.
    ///
    /// Later records shadow earlier ones: the last match wins. In-memory
    /// uniqueness checks are expected to prevent duplicates from being
    /// stored, but the tie-break stands regardless.
    pub fn find_by(&self, key: &str, value: &str) -> StoreResult<Value> {
        let records = self.load_required()?;
        records
            .iter()
            .rev()
            .find(|record| record.get(key).and_then(Value::as_str) == Some(value))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
                value: value.to_string(),
            })
    }

    /// Encodes a typed record for storage.
    pub fn encode<T: Serialize>(&self, record: &T) -> StoreResult<Value> {
        serde_json::to_value(record).map_err(|e| StoreError::Encode {
            reason: e.to_string(),
        })
    }

    /// Decodes a stored record into its typed form; a record that does not
    /// deserialize is corruption.
    pub fn decode<T: DeserializeOwned>(&self, record: Value) -> StoreResult<T> {
        serde_json::from_value(record).map_err(|e| self.corrupt(e.to_string()))
    }

    fn parse(&self, text: &str) -> StoreResult<Vec<Value>> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| self.corrupt(e.to_string()))?;
        match value {
            Value::Array(records) => Ok(records),
            other => Err(self.corrupt(format!(
                "expected a record array, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Rewrites the whole store file.
    fn persist(&self, records: &[Value]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let text = serde_json::to_string_pretty(records).map_err(|e| StoreError::Encode {
            reason: e.to_string(),
        })?;
        fs::write(&self.path, text).map_err(|e| self.io_error(e))
    }

    fn corrupt(&self, reason: String) -> StoreError {
        StoreError::Corrupt {
            store: self.name.to_string(),
            reason,
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            store: self.name.to_string(),
            source,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
