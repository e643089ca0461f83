//! Derived progression state
//!
//! Everything here is read-only: milestones are sorted into a fresh vector
//! and never mutated.

use serde::Serialize;

use crate::schemas::{Milestone, Task};

/// Per-milestone summary for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneSummary {
    pub sequence_order: i32,
    pub name: String,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub complete: bool,
    pub unlocked: bool,
}

/// Aggregate progress of one order item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Index (in ascending `sequenceOrder`) of the first incomplete milestone
    pub active_milestone_index: usize,
    /// Percentage of terminal tasks, 0-100
    pub overall_progress: u8,
    /// Summaries in ascending `sequenceOrder`
    pub milestones: Vec<MilestoneSummary>,
}

/// Clone milestones sorted by `sequenceOrder`, with each milestone's tasks
/// sorted the same way. The sort is stable, so ties keep input order.
pub fn sort_by_sequence(milestones: &[Milestone]) -> Vec<Milestone> {
    let mut sorted = milestones.to_vec();
    sorted.sort_by_key(|m| m.sequence_order);
    for milestone in &mut sorted {
        milestone.tasks.sort_by_key(|t: &Task| t.sequence_order);
    }
    sorted
}

/// Index of the first incomplete milestone of an already sorted sequence.
///
/// When every milestone is complete this is the last index; an empty
/// sequence yields 0.
pub fn active_milestone_index(sorted: &[Milestone]) -> usize {
    sorted
        .iter()
        .position(|m| !m.is_complete())
        .unwrap_or_else(|| sorted.len().saturating_sub(1))
}

/// A milestone is unlocked when every milestone before it is complete.
pub fn is_unlocked(sorted: &[Milestone], index: usize) -> bool {
    sorted.iter().take(index).all(|m| m.is_complete())
}

/// Percentage of terminal tasks, rounded half up.
///
/// Capped at 99 while any task is still open, so 100 means everything is
/// terminal. No tasks yields 0.
pub fn overall_progress(milestones: &[Milestone]) -> u8 {
    let (completed, total) = milestones.iter().fold((0usize, 0usize), |(c, t), m| {
        (c + m.completed_task_count(), t + m.tasks.len())
    });

    if total == 0 {
        return 0;
    }

    let rounded = (completed * 200 + total) / (2 * total);
    let capped = if completed < total { rounded.min(99) } else { rounded };
    capped as u8
}

/// Compute display state for a milestone sequence in any order.
pub fn compute_progress(milestones: &[Milestone]) -> ProgressSnapshot {
    let sorted = sort_by_sequence(milestones);
    snapshot_of_sorted(&sorted)
}

pub(crate) fn snapshot_of_sorted(sorted: &[Milestone]) -> ProgressSnapshot {
    let mut prefix_complete = true;
    let summaries = sorted
        .iter()
        .map(|m| {
            let complete = m.is_complete();
            let summary = MilestoneSummary {
                sequence_order: m.sequence_order,
                name: m.name.clone(),
                completed_tasks: m.completed_task_count(),
                total_tasks: m.tasks.len(),
                complete,
                unlocked: prefix_complete,
            };
            prefix_complete &= complete;
            summary
        })
        .collect();

    ProgressSnapshot {
        active_milestone_index: active_milestone_index(sorted),
        overall_progress: overall_progress(sorted),
        milestones: summaries,
    }
}
