//! JSON request file IO
//!
//! Guest arrival is driven by a request file holding the reservation
//! localizer and the guest's id card.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::errors::{CliError, CliResult};

/// Guest arrival request as read from the input file.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrivalRequest {
    #[serde(rename = "Localizer")]
    pub localizer: String,
    #[serde(rename = "IdCard")]
    pub id_card: String,
}

/// Reads an arrival request file.
///
/// A missing file and a file that does not decode into a request are
/// distinct failures.
pub fn read_arrival_request(path: &Path) -> CliResult<ArrivalRequest> {
    let text = fs::read_to_string(path).map_err(|_| CliError::InputNotFound {
        path: path.display().to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| CliError::InvalidRequest {
        reason: e.to_string(),
    })
}
