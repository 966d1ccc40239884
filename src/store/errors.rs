//! Store error types

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by the JSON record stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store file exists but does not hold a record array
    #[error("store {store} is corrupt: {reason}")]
    Corrupt { store: String, reason: String },

    /// Append would violate a uniqueness key
    #[error("duplicate record for key `{key}`")]
    Duplicate { key: String },

    /// Lookup miss
    #[error("no record with {key} = `{value}`")]
    NotFound { key: String, value: String },

    /// Store file is required but absent
    #[error("store {store} not found")]
    Missing { store: String },

    /// Record could not be encoded as a flat JSON object
    #[error("record encoding failed: {reason}")]
    Encode { reason: String },

    /// Underlying filesystem failure
    #[error("store {store} io failure")]
    Io {
        store: String,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_error_names_the_key() {
        let err = StoreError::Duplicate {
            key: "localizer".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate record for key `localizer`");
    }

    #[test]
    fn test_corrupt_error_names_the_store() {
        let err = StoreError::Corrupt {
            store: "reservations".to_string(),
            reason: "expected a record array".to_string(),
        };
        assert!(err.to_string().contains("reservations"));
    }
}
