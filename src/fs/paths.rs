//! Path resolution utilities for milestone-tracker
//!
//! Provides functions to locate the tracker root and construct paths
//! to the config and order item files.

use std::path::{Path, PathBuf};

use crate::errors::{Result, TrackerError};

/// Name of the directory holding tracker state
pub const TRACKER_DIR: &str = ".milestones";

/// Find the nearest ancestor directory containing a `.milestones` directory.
///
/// # Arguments
/// * `start_cwd` - The directory to start searching from
///
/// # Errors
/// * `RepoNotFound` - If no ancestor contains `.milestones`
pub fn find_repo_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| TrackerError::RepoNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(TRACKER_DIR).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(TrackerError::RepoNotFound(format!(
                    "Could not find a {} directory; run `milestone-tracker init`",
                    TRACKER_DIR
                )));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Reject order item ids that would escape the items directory.
pub fn validate_order_item_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(TrackerError::InvalidOrderItemId(id.to_string()))
    }
}

/// Get the path to the .milestones directory.
pub fn get_tracker_dir(root: &Path) -> PathBuf {
    root.join(TRACKER_DIR)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_tracker_dir(root).join("config.json")
}

/// Get the path to the items directory.
pub fn get_items_dir(root: &Path) -> PathBuf {
    get_tracker_dir(root).join("items")
}

/// Get the path to an order item's progression file.
pub fn get_item_path(root: &Path, order_item_id: &str) -> Result<PathBuf> {
    validate_order_item_id(order_item_id)?;
    Ok(get_items_dir(root).join(format!("{}.json", order_item_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(TRACKER_DIR)).unwrap();
        temp
    }

    #[test]
    fn test_find_repo_root_from_root() {
        let temp = setup_repo();
        let root = find_repo_root(temp.path()).unwrap();
        assert_eq!(root.canonicalize().unwrap(), temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_repo_root_from_subdir() {
        let temp = setup_repo();
        let subdir = temp.path().join("orders").join("2026");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_repo_root(&subdir).unwrap();
        assert_eq!(root.canonicalize().unwrap(), temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_repo_root_not_found() {
        let temp = TempDir::new().unwrap();

        let result = find_repo_root(temp.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Could not find"));
    }

    #[test]
    fn test_get_paths() {
        let root = PathBuf::from("/shop");
        assert_eq!(get_tracker_dir(&root), PathBuf::from("/shop/.milestones"));
        assert_eq!(get_config_path(&root), PathBuf::from("/shop/.milestones/config.json"));
        assert_eq!(
            get_item_path(&root, "oi-42").unwrap(),
            PathBuf::from("/shop/.milestones/items/oi-42.json")
        );
    }

    #[test]
    fn test_order_item_id_cannot_escape() {
        assert!(validate_order_item_id("oi_42.v2").is_ok());
        assert!(validate_order_item_id("").is_err());
        assert!(validate_order_item_id("..").is_err());
        assert!(validate_order_item_id("../etc").is_err());
        assert!(validate_order_item_id("a/b").is_err());
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        let resolved = resolve_cwd(Some(&path));
        assert_eq!(resolved, path);
    }
}
