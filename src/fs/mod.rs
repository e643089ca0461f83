//! File system utilities for milestone-tracker
//!
//! Provides path resolution and JSON file operations for the reference
//! file store used by the CLI.

mod json;
mod paths;

pub use json::{
    list_order_item_ids, read_config, read_json, read_progress, write_config, write_json,
    write_progress,
};
pub use paths::{
    find_repo_root, get_config_path, get_item_path, get_items_dir, get_tracker_dir, resolve_cwd,
    validate_order_item_id, TRACKER_DIR,
};
