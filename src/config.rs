//! Store path configuration
//!
//! The data directory is an explicit configuration value handed to whoever
//! constructs the stores; there is no process-wide path global.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the three lifecycle stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the JSON store files (default: "./store")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./store")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    /// Create a config rooted at the given directory
    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the reservation store
    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join("reservations.json")
    }

    /// Path of the stay (check-in) store
    pub fn stays_path(&self) -> PathBuf {
        self.data_dir.join("stays.json")
    }

    /// Path of the checkout store
    pub fn checkouts_path(&self) -> PathBuf {
        self.data_dir.join("checkouts.json")
    }
}
