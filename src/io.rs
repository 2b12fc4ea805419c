//! JSON I/O helpers.
//!
//! - `read_json_file`: decode a JSON document from disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{PersistencyError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and decode a JSON document from `path`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .map_err(|e| PersistencyError::new(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| PersistencyError::new(format!("Failed to parse {}: {e}", path.display())))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        PersistencyError::new(format!("Failed to serialize JSON for {}: {e}", path.display()))
    })?;
    fs::write(path, json).map_err(|e| {
        PersistencyError::new(format!("Failed to write JSON {}: {e}", path.display()))
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                PersistencyError::new(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
    }
    Ok(())
}
