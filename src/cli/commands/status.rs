//! Status command - Show progress of all order items

use std::path::Path;

use serde::Serialize;

use crate::errors::{Result, TrackerError};
use crate::fs::{find_repo_root, resolve_cwd};
use crate::workflow::ProgressionService;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusLine {
    order_item_id: String,
    active_milestone: Option<String>,
    active_milestone_index: usize,
    milestone_count: usize,
    overall_progress: u8,
}

/// Show progress of all order items
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let root = find_repo_root(&resolve_cwd(cwd))?;
    let service = ProgressionService::open(&root)?;

    let mut lines = Vec::new();
    for id in service.order_item_ids()? {
        let snapshot = match service.snapshot(&id).await {
            Ok((_, snapshot)) => snapshot,
            Err(e) if !matches!(e, TrackerError::Io(_)) => {
                tracing::warn!(
                    order_item = %id,
                    code = e.code(),
                    "skipping unreadable order item: {}",
                    e
                );
                continue;
            }
            Err(e) => return Err(e),
        };
        lines.push(StatusLine {
            active_milestone: snapshot
                .milestones
                .get(snapshot.active_milestone_index)
                .map(|m| m.name.clone()),
            active_milestone_index: snapshot.active_milestone_index,
            milestone_count: snapshot.milestones.len(),
            overall_progress: snapshot.overall_progress,
            order_item_id: id,
        });
    }

    if json {
        let out = serde_json::to_string_pretty(&lines)
            .map_err(|e| TrackerError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    if lines.is_empty() {
        println!("No order items tracked");
        return Ok(());
    }

    for line in &lines {
        println!(
            "{:<24} {:>3}%  milestone {}/{}  {}",
            line.order_item_id,
            line.overall_progress,
            (line.active_milestone_index + 1).min(line.milestone_count),
            line.milestone_count,
            line.active_milestone.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
