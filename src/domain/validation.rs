//! Validation rules for progressions and task transitions

use std::collections::HashSet;

use crate::errors::{Result, TrackerError};
use crate::schemas::{Attachment, Milestone, MilestoneKind, OrderItemProgress, TaskStatus};

use super::quality::MilestoneClassifier;
use super::states::{is_allowed_transition, is_valid_status};

/// Check the structural invariants of a progression.
///
/// - milestone `sequenceOrder`s are unique within the order item
/// - task `sequenceOrder`s are unique within their milestone
/// - task ids are unique across the order item, so a task id resolves to
///   exactly one task
/// - every task status belongs to its milestone's state machine
pub fn validate_progression<C: MilestoneClassifier + ?Sized>(
    progress: &OrderItemProgress,
    classifier: &C,
) -> Result<()> {
    let mut milestone_orders = HashSet::new();
    let mut task_ids = HashSet::new();

    for milestone in &progress.milestones {
        if !milestone_orders.insert(milestone.sequence_order) {
            return Err(TrackerError::MalformedProgression(format!(
                "duplicate milestone sequenceOrder {} in order item {}",
                milestone.sequence_order, progress.order_item_id
            )));
        }

        let kind = classifier.classify(milestone);
        let mut task_orders = HashSet::new();

        for task in &milestone.tasks {
            if !task_orders.insert(task.sequence_order) {
                return Err(TrackerError::MalformedProgression(format!(
                    "duplicate task sequenceOrder {} in milestone {}",
                    task.sequence_order, milestone.sequence_order
                )));
            }
            if !task_ids.insert(task.id.as_str()) {
                return Err(TrackerError::MalformedProgression(format!(
                    "duplicate task id {} in order item {}",
                    task.id, progress.order_item_id
                )));
            }
            if !is_valid_status(kind, task.status) {
                return Err(TrackerError::MalformedProgression(format!(
                    "task {} has status {} which is not valid in a {} milestone",
                    task.id, task.status, kind
                )));
            }
        }
    }

    Ok(())
}

/// Check that the milestone at `index` of a sorted sequence is unlocked
pub fn can_enter_milestone(sorted: &[Milestone], index: usize) -> Result<()> {
    let Some(milestone) = sorted.get(index) else {
        return Err(TrackerError::MalformedProgression(format!(
            "milestone index {} out of range",
            index
        )));
    };
    if !sorted[..index].iter().all(|m| m.is_complete()) {
        return Err(TrackerError::MilestoneLocked {
            milestone_sequence: milestone.sequence_order,
        });
    }
    Ok(())
}

/// Validate a single task transition under the state machine of `kind`
pub fn validate_transition(
    kind: MilestoneKind,
    current: TaskStatus,
    target: TaskStatus,
    attachment: Option<&Attachment>,
) -> Result<()> {
    if !is_valid_status(kind, target) || !is_allowed_transition(kind, current, target) {
        return Err(TrackerError::InvalidTransition { current, target });
    }

    if let Some(attachment) = attachment {
        if !attachment.is_empty() && !target.accepts_attachment() {
            return Err(TrackerError::AttachmentNotAllowed { target });
        }
    }

    Ok(())
}
