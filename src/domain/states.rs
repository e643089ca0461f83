//! Task state machine definitions
//!
//! Standard tasks:       PENDING → IN_PROGRESS → DONE, with CANCELLED from
//!                       PENDING or IN_PROGRESS and DONE → IN_PROGRESS (reopen).
//! Quality-check tasks:  PENDING → IN_PROGRESS → PASS | FAIL, with
//!                       PASS | FAIL → IN_PROGRESS (reopen).

use crate::schemas::{MilestoneKind, TaskStatus};

/// Statuses a standard task may hold.
pub const STANDARD_STATUSES: &[TaskStatus] = &[
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Done,
    TaskStatus::Cancelled,
];

/// Statuses a quality-check task may hold.
pub const QUALITY_CHECK_STATUSES: &[TaskStatus] = &[
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Pass,
    TaskStatus::Fail,
];

/// Allowed `(from, to)` edges for standard tasks.
///
/// IMPORTANT: this table is the source of truth for standard transitions.
pub const STANDARD_TRANSITIONS: &[(TaskStatus, TaskStatus)] = &[
    (TaskStatus::Pending, TaskStatus::InProgress),
    (TaskStatus::Pending, TaskStatus::Cancelled),
    (TaskStatus::InProgress, TaskStatus::Done),
    (TaskStatus::InProgress, TaskStatus::Cancelled),
    (TaskStatus::Done, TaskStatus::InProgress),
];

/// Allowed `(from, to)` edges for quality-check tasks.
///
/// IMPORTANT: this table is the source of truth for quality-check transitions.
pub const QUALITY_CHECK_TRANSITIONS: &[(TaskStatus, TaskStatus)] = &[
    (TaskStatus::Pending, TaskStatus::InProgress),
    (TaskStatus::InProgress, TaskStatus::Pass),
    (TaskStatus::InProgress, TaskStatus::Fail),
    (TaskStatus::Pass, TaskStatus::InProgress),
    (TaskStatus::Fail, TaskStatus::InProgress),
];

/// Statuses valid for tasks of the given milestone kind.
pub fn valid_statuses(kind: MilestoneKind) -> &'static [TaskStatus] {
    match kind {
        MilestoneKind::Standard => STANDARD_STATUSES,
        MilestoneKind::QualityCheck => QUALITY_CHECK_STATUSES,
    }
}

/// Transition table for the given milestone kind.
pub fn transition_table(kind: MilestoneKind) -> &'static [(TaskStatus, TaskStatus)] {
    match kind {
        MilestoneKind::Standard => STANDARD_TRANSITIONS,
        MilestoneKind::QualityCheck => QUALITY_CHECK_TRANSITIONS,
    }
}

/// Whether `status` belongs to the state machine of `kind`.
pub fn is_valid_status(kind: MilestoneKind, status: TaskStatus) -> bool {
    valid_statuses(kind).contains(&status)
}

/// Whether `from → to` is an edge of the state machine of `kind`.
pub fn is_allowed_transition(kind: MilestoneKind, from: TaskStatus, to: TaskStatus) -> bool {
    transition_table(kind).contains(&(from, to))
}

/// Returns the statuses reachable in one step from `current`.
pub fn get_allowed_next_states(kind: MilestoneKind, current: TaskStatus) -> Vec<TaskStatus> {
    transition_table(kind)
        .iter()
        .filter(|(from, _)| *from == current)
        .map(|(_, to)| *to)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_only_use_valid_statuses() {
        for kind in [MilestoneKind::Standard, MilestoneKind::QualityCheck] {
            for (from, to) in transition_table(kind) {
                assert!(is_valid_status(kind, *from), "{} not valid for {}", from, kind);
                assert!(is_valid_status(kind, *to), "{} not valid for {}", to, kind);
            }
        }
    }

    #[test]
    fn test_standard_next_states() {
        assert_eq!(
            get_allowed_next_states(MilestoneKind::Standard, TaskStatus::Pending),
            vec![TaskStatus::InProgress, TaskStatus::Cancelled]
        );
        assert_eq!(
            get_allowed_next_states(MilestoneKind::Standard, TaskStatus::InProgress),
            vec![TaskStatus::Done, TaskStatus::Cancelled]
        );
        assert_eq!(
            get_allowed_next_states(MilestoneKind::Standard, TaskStatus::Done),
            vec![TaskStatus::InProgress]
        );
        assert_eq!(
            get_allowed_next_states(MilestoneKind::Standard, TaskStatus::Cancelled),
            vec![]
        );
    }

    #[test]
    fn test_quality_check_next_states() {
        assert_eq!(
            get_allowed_next_states(MilestoneKind::QualityCheck, TaskStatus::InProgress),
            vec![TaskStatus::Pass, TaskStatus::Fail]
        );
        assert_eq!(
            get_allowed_next_states(MilestoneKind::QualityCheck, TaskStatus::Fail),
            vec![TaskStatus::InProgress]
        );
        assert!(!is_allowed_transition(
            MilestoneKind::QualityCheck,
            TaskStatus::InProgress,
            TaskStatus::Cancelled
        ));
        assert!(!is_allowed_transition(
            MilestoneKind::QualityCheck,
            TaskStatus::InProgress,
            TaskStatus::Done
        ));
    }

    #[test]
    fn test_rejected_edges() {
        assert!(!is_allowed_transition(
            MilestoneKind::Standard,
            TaskStatus::Done,
            TaskStatus::Pending
        ));
        assert!(!is_allowed_transition(
            MilestoneKind::Standard,
            TaskStatus::Pending,
            TaskStatus::Done
        ));
        assert!(!is_allowed_transition(
            MilestoneKind::Standard,
            TaskStatus::Pending,
            TaskStatus::Pending
        ));
    }

    #[test]
    fn test_valid_statuses_per_kind() {
        assert!(is_valid_status(MilestoneKind::Standard, TaskStatus::Cancelled));
        assert!(!is_valid_status(MilestoneKind::Standard, TaskStatus::Pass));
        assert!(is_valid_status(MilestoneKind::QualityCheck, TaskStatus::Fail));
        assert!(!is_valid_status(MilestoneKind::QualityCheck, TaskStatus::Cancelled));
    }
}
