//! DatasetLoader - Load the roster from a JSON file
//!
//! Accepted shapes:
//! - a bare array of records
//! - an object holding the array under `ROSTER`, `LEGION_OS`, `agents`
//!   or `data` (first array in that order wins)
//! - an object `{"LEGION_OS_ULTIMATE": {"ROSTER": [...]}}`, consulted only
//!   when the keys above produced nothing
//!
//! Anything else yields an empty roster.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::LoadError;

/// Wrapper keys searched in priority order
pub const ROSTER_KEYS: [&str; 4] = ["ROSTER", "LEGION_OS", "agents", "data"];

/// Outer wrapper used by the "ultimate" archive exports
pub const ULTIMATE_KEY: &str = "LEGION_OS_ULTIMATE";

/// Dataset loader
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    /// Create a loader for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the roster, falling back to empty on any failure.
    ///
    /// Never fails: a missing file is a warning, a broken file an error log.
    pub fn load(&self) -> Vec<Value> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "dataset not found, using empty roster");
            return Vec::new();
        }

        match self.try_load() {
            Ok(roster) => {
                info!(
                    path = %self.path.display(),
                    count = roster.len(),
                    "ingested {} entities",
                    roster.len()
                );
                roster
            }
            Err(err) => {
                error!(error = %err, "failed to load dataset");
                Vec::new()
            }
        }
    }

    /// Read and normalize the file, reporting failures
    pub fn try_load(&self) -> Result<Vec<Value>, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|source| LoadError::Json {
            path: self.path.clone(),
            source,
        })?;

        Ok(extract_roster(value))
    }
}

/// Normalize a parsed dataset into the roster sequence
pub fn extract_roster(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let roster = ROSTER_KEYS
                .iter()
                .find_map(|key| match map.get_mut(*key) {
                    Some(Value::Array(items)) => Some(std::mem::take(items)),
                    _ => None,
                })
                .unwrap_or_default();

            if !roster.is_empty() {
                return roster;
            }

            match map.remove(ULTIMATE_KEY) {
                Some(Value::Object(mut ultimate)) => match ultimate.remove("ROSTER") {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                },
                _ => roster,
            }
        }
        _ => Vec::new(),
    }
}
