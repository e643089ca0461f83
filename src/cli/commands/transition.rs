//! Transition command - Move a task to a new status

use std::path::Path;

use crate::domain::TransitionRequest;
use crate::errors::{Result, TrackerError};
use crate::fs::{find_repo_root, resolve_cwd};
use crate::schemas::{Attachment, TaskStatus};
use crate::workflow::ProgressionService;

/// Build the engine request from command-line arguments
pub fn build_request(
    id: &str,
    task: &str,
    status: TaskStatus,
    note: Option<String>,
    image: Option<String>,
) -> TransitionRequest {
    let request = TransitionRequest::new(id, task, status);
    let attachment = Attachment { note, image };
    if attachment.is_empty() {
        request
    } else {
        request.with_attachment(attachment)
    }
}

/// Apply a transition and print the resulting progress
pub async fn run(
    cwd: Option<&Path>,
    id: &str,
    task: &str,
    status: TaskStatus,
    note: Option<String>,
    image: Option<String>,
    json: bool,
) -> Result<()> {
    let root = find_repo_root(&resolve_cwd(cwd))?;
    let service = ProgressionService::open(&root)?;

    let outcome = service
        .transition(build_request(id, task, status, note, image))
        .await?;

    if json {
        let out = serde_json::to_string_pretty(&outcome)
            .map_err(|e| TrackerError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        println!(
            "{}: {} -> {}  (milestone {}, {}%)",
            task,
            outcome.previous_status,
            status,
            outcome.active_milestone_index + 1,
            outcome.overall_progress
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_without_attachment() {
        let request = build_request("oi-1", "t1", TaskStatus::InProgress, None, None);
        assert!(request.attachment.is_none());
    }

    #[test]
    fn test_build_request_with_note() {
        let request = build_request("oi-1", "t1", TaskStatus::Done, Some("ok".into()), None);
        assert_eq!(
            request.attachment,
            Some(Attachment {
                note: Some("ok".into()),
                image: None
            })
        );
    }
}
