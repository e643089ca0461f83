//! Init command - Create the .milestones directory

use std::path::Path;

use crate::errors::Result;
use crate::fs::{self, get_config_path, get_items_dir, resolve_cwd};
use crate::schemas::Config;

/// Initialize a tracker root in the specified directory
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    if init_at(&root, force)? {
        println!("Initialized {}", fs::get_tracker_dir(&root).display());
    } else {
        println!(
            "{} already exists; use --force to reset config.json",
            get_config_path(&root).display()
        );
    }
    Ok(())
}

/// Write the default config and items directory. Returns false when a
/// config already exists and `force` is not set.
pub fn init_at(root: &Path, force: bool) -> Result<bool> {
    let config_path = get_config_path(root);
    if config_path.exists() && !force {
        tracing::debug!(path = %config_path.display(), "config already present");
        return Ok(false);
    }

    std::fs::create_dir_all(get_items_dir(root))?;
    fs::write_config(root, &Config::default())?;
    tracing::info!(root = %root.display(), "initialized tracker");
    Ok(true)
}
