//! Input file loading
//!
//! Reads the migration input file and parses it as a JSON array of raw game
//! records. Load failures are the only fatal error category in the system:
//! the loader reports them as an empty record list and the driver
//! short-circuits on that.

use crate::core::json_type_name;
use crate::domain::{MigrateError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load game records from a JSON file
///
/// Returns the parsed array as-is, with no per-element validation. On any
/// failure (file unreadable, invalid JSON, or a root value that is not an
/// array) logs an error with the path and underlying cause and returns an
/// empty vector. Callers must treat an empty result as "nothing to process".
pub fn load_games(path: &Path) -> Vec<Value> {
    match try_load(path) {
        Ok(games) => {
            tracing::info!(
                path = %path.display(),
                count = games.len(),
                "Loaded game records"
            );
            games
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Failed to load game records"
            );
            Vec::new()
        }
    }
}

fn try_load(path: &Path) -> Result<Vec<Value>> {
    let raw = fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&raw)?;

    match data {
        Value::Array(records) => Ok(records),
        other => Err(MigrateError::InvalidRecord(format!(
            "JSON root must be an array of games, got {}",
            json_type_name(&other)
        ))),
    }
}
