//! Register command - Store a new order item progression from a JSON file

use std::path::Path;

use crate::errors::{Result, TrackerError};
use crate::fs::{find_repo_root, get_item_path, read_json, resolve_cwd};
use crate::schemas::OrderItemProgress;
use crate::workflow::ProgressionService;

/// Register the progression described by `file`
pub async fn run(cwd: Option<&Path>, file: &Path, force: bool) -> Result<()> {
    let root = find_repo_root(&resolve_cwd(cwd))?;
    let progress = register_at(&root, file, force).await?;
    println!(
        "Registered {} ({} milestones, {} tasks)",
        progress.order_item_id,
        progress.milestones.len(),
        progress.task_count()
    );
    Ok(())
}

/// Validate and store the progression in `file` under `root`.
///
/// An already stored order item is only replaced when `force` is set.
pub async fn register_at(root: &Path, file: &Path, force: bool) -> Result<OrderItemProgress> {
    let progress: OrderItemProgress = read_json(file)?;
    let existing = get_item_path(root, &progress.order_item_id)?;
    if existing.exists() && !force {
        return Err(TrackerError::OrderItemExists(progress.order_item_id));
    }

    let service = ProgressionService::open(root)?;
    service.register(&progress).await?;
    Ok(progress)
}
