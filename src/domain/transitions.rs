//! Task transition logic
//!
//! Pure functions for applying a task status change to an order item's
//! milestone sequence.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{Result, TrackerError};
use crate::schemas::{
    Attachment, Config, Milestone, MilestoneKind, OrderItemProgress, Task, TaskStatus,
};

use super::progress::{compute_progress, snapshot_of_sorted, sort_by_sequence, ProgressSnapshot};
use super::quality::{MilestoneClassifier, NameMarkerClassifier};
use super::states::get_allowed_next_states;
use super::validation::{can_enter_milestone, validate_progression, validate_transition};

/// A request to move one task to a new status
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub order_item_id: String,
    pub task_id: String,
    pub target: TaskStatus,
    pub attachment: Option<Attachment>,
    /// Recorded as the task's `updatedAt`; left unchanged when absent
    pub at: Option<DateTime<Utc>>,
}

impl TransitionRequest {
    pub fn new(
        order_item_id: impl Into<String>,
        task_id: impl Into<String>,
        target: TaskStatus,
    ) -> Self {
        TransitionRequest {
            order_item_id: order_item_id.into(),
            task_id: task_id.into(),
            target,
            attachment: None,
            at: None,
        }
    }

    /// Return a new request carrying completion evidence
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Return a new request stamped with the time the change happened
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.at = Some(at);
        self
    }
}

/// Result of an applied transition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionOutcome {
    /// The updated progression, milestones and tasks sorted by `sequenceOrder`
    pub progress: OrderItemProgress,
    /// Status the task held before the transition
    pub previous_status: TaskStatus,
    pub active_milestone_index: usize,
    pub overall_progress: u8,
}

/// Validates and applies task transitions for one order item at a time.
///
/// The engine holds no state besides its classifier. Callers must serialize
/// calls for the same order item (see [`crate::workflow::ItemLocks`]).
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine<C = NameMarkerClassifier> {
    classifier: C,
}

impl ProgressionEngine<NameMarkerClassifier> {
    /// Build an engine whose quality-check markers come from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(ProgressionEngine::new(NameMarkerClassifier::new(
            &config.quality_check_markers,
        )?))
    }
}

impl<C: MilestoneClassifier> ProgressionEngine<C> {
    pub fn new(classifier: C) -> Self {
        ProgressionEngine { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// State machine governing the tasks of `milestone`
    pub fn kind_of(&self, milestone: &Milestone) -> MilestoneKind {
        self.classifier.classify(milestone)
    }

    /// Statuses `task` may move to next, ignoring lock state
    pub fn allowed_targets(&self, milestone: &Milestone, task: &Task) -> Vec<TaskStatus> {
        get_allowed_next_states(self.kind_of(milestone), task.status)
    }

    /// Read-only progress of a milestone sequence
    pub fn compute_progress(&self, milestones: &[Milestone]) -> ProgressSnapshot {
        compute_progress(milestones)
    }

    /// Validate and apply a task transition.
    ///
    /// Never mutates `progress`; the updated progression is returned inside
    /// the outcome.
    ///
    /// # Errors
    /// * `TaskNotFound` - the task is not part of this order item
    /// * `MalformedProgression` - the milestone structure is inconsistent
    /// * `MilestoneLocked` - an earlier milestone is incomplete
    /// * `InvalidTransition` - the edge is not in the task's state machine
    /// * `AttachmentNotAllowed` - note/image supplied with a non-terminal target
    pub fn request_transition(
        &self,
        progress: &OrderItemProgress,
        request: TransitionRequest,
    ) -> Result<TransitionOutcome> {
        let not_found = || TrackerError::TaskNotFound {
            order_item_id: request.order_item_id.clone(),
            task_id: request.task_id.clone(),
        };

        if request.order_item_id != progress.order_item_id {
            return Err(not_found());
        }

        validate_progression(progress, &self.classifier)?;

        let mut sorted = sort_by_sequence(&progress.milestones);
        let (milestone_index, task_index) =
            locate_task(&sorted, &request.task_id).ok_or_else(not_found)?;

        can_enter_milestone(&sorted, milestone_index)?;

        let milestone = &sorted[milestone_index];
        let kind = self.kind_of(milestone);
        let task = &milestone.tasks[task_index];
        let previous_status = task.status;

        validate_transition(
            kind,
            previous_status,
            request.target,
            request.attachment.as_ref(),
        )?;

        let attachment = request
            .attachment
            .filter(|_| request.target.accepts_attachment());
        let updated = task
            .clone()
            .transitioned(request.target, attachment, request.at);
        sorted[milestone_index].tasks[task_index] = updated;

        let snapshot = snapshot_of_sorted(&sorted);

        Ok(TransitionOutcome {
            progress: OrderItemProgress {
                schema_version: progress.schema_version,
                order_item_id: progress.order_item_id.clone(),
                milestones: sorted,
            },
            previous_status,
            active_milestone_index: snapshot.active_milestone_index,
            overall_progress: snapshot.overall_progress,
        })
    }
}

fn locate_task(sorted: &[Milestone], task_id: &str) -> Option<(usize, usize)> {
    sorted.iter().enumerate().find_map(|(mi, m)| {
        m.tasks
            .iter()
            .position(|t| t.id == task_id)
            .map(|ti| (mi, ti))
    })
}
