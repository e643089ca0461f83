//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{Result, TrackerError};
use crate::schemas::{Config, OrderItemProgress};

use super::paths::{get_config_path, get_item_path, get_items_dir};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TrackerError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            TrackerError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        TrackerError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| TrackerError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the config.json file, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Write the config.json file.
pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}

/// Read the stored progression of an order item.
pub fn read_progress(root: &Path, order_item_id: &str) -> Result<OrderItemProgress> {
    let path = get_item_path(root, order_item_id)?;
    let progress: OrderItemProgress = read_json(&path)?;
    if progress.order_item_id != order_item_id {
        return Err(TrackerError::InvalidJson(format!(
            "{} holds order item {}",
            path.display(),
            progress.order_item_id
        )));
    }
    Ok(progress)
}

/// Write the progression of an order item to its own file.
pub fn write_progress(root: &Path, progress: &OrderItemProgress) -> Result<()> {
    let path = get_item_path(root, &progress.order_item_id)?;
    write_json(&path, progress)
}

/// List the ids of all stored order items, sorted.
pub fn list_order_item_ids(root: &Path) -> Result<Vec<String>> {
    let dir = get_items_dir(root);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut ids = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            ids.push(stem.to_string());
        }
    }
    ids.sort();
    Ok(ids)
}
