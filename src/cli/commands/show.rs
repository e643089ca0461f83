//! Show command - Show milestones and tasks of an order item

use std::path::Path;

use serde::Serialize;

use crate::domain::ProgressSnapshot;
use crate::errors::{Result, TrackerError};
use crate::fs::{find_repo_root, resolve_cwd};
use crate::schemas::OrderItemProgress;
use crate::workflow::ProgressionService;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    progress: &'a OrderItemProgress,
    snapshot: &'a ProgressSnapshot,
}

/// Show details of a specific order item
pub async fn run(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let root = find_repo_root(&resolve_cwd(cwd))?;
    let service = ProgressionService::open(&root)?;
    let (progress, snapshot) = service.snapshot(id).await?;

    if json {
        let out = serde_json::to_string_pretty(&ShowOutput {
            progress: &progress,
            snapshot: &snapshot,
        })
        .map_err(|e| TrackerError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}  {}%", progress.order_item_id, snapshot.overall_progress);

    let engine = service.engine();
    let sorted = crate::domain::sort_by_sequence(&progress.milestones);
    for (index, (milestone, summary)) in sorted.iter().zip(&snapshot.milestones).enumerate() {
        let marker = if index == snapshot.active_milestone_index {
            ">"
        } else if summary.unlocked {
            " "
        } else {
            "#"
        };
        println!(
            "{} [{}] {} ({}) {}/{}",
            marker,
            milestone.sequence_order,
            milestone.name,
            engine.kind_of(milestone),
            summary.completed_tasks,
            summary.total_tasks
        );

        for task in &milestone.tasks {
            let next: Vec<String> = if summary.unlocked {
                engine
                    .allowed_targets(milestone, task)
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            } else {
                Vec::new()
            };
            println!(
                "    {:<12} {:<24} {}",
                task.status.to_string(),
                format!("{} {}", task.id, task.name),
                if next.is_empty() {
                    String::new()
                } else {
                    format!("-> {}", next.join(" | "))
                }
            );
        }
    }
    Ok(())
}
