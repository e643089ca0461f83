//! Property-based tests for domain logic
//!
//! These tests use proptest to verify invariants across many random inputs.

#[cfg(test)]
mod tests {
    use crate::domain::progress::{compute_progress, overall_progress, sort_by_sequence};
    use crate::domain::transitions::{ProgressionEngine, TransitionRequest};
    use crate::domain::warranty::evaluate_warranty_fee;
    use crate::errors::TrackerError;
    use crate::schemas::{Milestone, OrderItemProgress, Task, TaskStatus, WarrantyClaimItem};
    use proptest::prelude::*;

    // ===== STRATEGY HELPERS =====

    fn any_standard_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::Pending),
            Just(TaskStatus::InProgress),
            Just(TaskStatus::Done),
            Just(TaskStatus::Cancelled),
        ]
    }

    fn any_quality_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::Pending),
            Just(TaskStatus::InProgress),
            Just(TaskStatus::Pass),
            Just(TaskStatus::Fail),
        ]
    }

    fn any_target() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![any_standard_status(), Just(TaskStatus::Pass), Just(TaskStatus::Fail)]
    }

    /// (is quality check, task statuses) for one milestone
    fn any_milestone_shape() -> impl Strategy<Value = (bool, Vec<TaskStatus>)> {
        any::<bool>().prop_flat_map(|quality| {
            let statuses = if quality {
                prop::collection::vec(any_quality_status(), 0..4).boxed()
            } else {
                prop::collection::vec(any_standard_status(), 0..4).boxed()
            };
            (Just(quality), statuses)
        })
    }

    fn build(shapes: &[(bool, Vec<TaskStatus>)]) -> OrderItemProgress {
        shapes
            .iter()
            .enumerate()
            .fold(OrderItemProgress::new("oi-prop"), |progress, (mi, (quality, statuses))| {
                let name = if *quality {
                    format!("Quality check {}", mi)
                } else {
                    format!("Phase {}", mi)
                };
                let milestone = statuses
                    .iter()
                    .enumerate()
                    .fold(Milestone::new(name, mi as i32 * 10), |m, (ti, status)| {
                        let id = format!("m{}-t{}", mi, ti);
                        m.with_task(Task::new(id, "task", ti as i32).with_status(*status))
                    });
                progress.with_milestone(milestone)
            })
    }

    /// A progression with its milestones in random input order
    fn any_progress() -> impl Strategy<Value = OrderItemProgress> {
        prop::collection::vec(any_milestone_shape(), 0..5)
            .prop_map(|shapes| build(&shapes))
            .prop_flat_map(|progress| {
                let milestones = progress.milestones.clone();
                Just(milestones).prop_shuffle().prop_map(move |shuffled| OrderItemProgress {
                    milestones: shuffled,
                    ..progress.clone()
                })
            })
    }

    fn all_task_ids(progress: &OrderItemProgress) -> Vec<String> {
        progress
            .milestones
            .iter()
            .flat_map(|m| m.tasks.iter().map(|t| t.id.clone()))
            .collect()
    }

    // ===== DERIVED STATE =====

    proptest! {
        /// Property: the active index is the first incomplete milestone, or the last one
        #[test]
        fn test_active_index_is_first_incomplete(progress in any_progress()) {
            let sorted = sort_by_sequence(&progress.milestones);
            let snapshot = compute_progress(&progress.milestones);
            let expected = sorted
                .iter()
                .position(|m| !m.is_complete())
                .unwrap_or(sorted.len().saturating_sub(1));
            prop_assert_eq!(snapshot.active_milestone_index, expected);
        }

        /// Property: progress is 100 exactly when every task is terminal
        #[test]
        fn test_full_progress_iff_all_terminal(progress in any_progress()) {
            let pct = overall_progress(&progress.milestones);
            let total = progress.task_count();
            let all_terminal = progress.milestones.iter().all(|m| m.is_complete());
            prop_assert!(pct <= 100);
            if total == 0 {
                prop_assert_eq!(pct, 0);
            } else {
                prop_assert_eq!(pct == 100, all_terminal);
            }
        }

        /// Property: moving any open task to a terminal status never lowers progress
        #[test]
        fn test_progress_monotonic(
            progress in any_progress(),
            pick in any::<prop::sample::Index>(),
        ) {
            let open: Vec<(usize, usize)> = progress
                .milestones
                .iter()
                .enumerate()
                .flat_map(|(mi, m)| {
                    m.tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| !t.is_terminal())
                        .map(move |(ti, _)| (mi, ti))
                })
                .collect();
            prop_assume!(!open.is_empty());

            let (mi, ti) = open[pick.index(open.len())];
            let before = overall_progress(&progress.milestones);
            let mut advanced = progress.clone();
            advanced.milestones[mi].tasks[ti].status = TaskStatus::Cancelled;
            prop_assert!(overall_progress(&advanced.milestones) >= before);
        }
    }

    // ===== TRANSITIONS =====

    proptest! {
        /// Property: tasks beyond the active milestone are always locked
        #[test]
        fn test_beyond_active_is_locked(progress in any_progress(), target in any_target()) {
            let engine: ProgressionEngine = ProgressionEngine::default();
            let sorted = sort_by_sequence(&progress.milestones);
            let active = compute_progress(&progress.milestones).active_milestone_index;

            for milestone in sorted.iter().skip(active + 1) {
                for task in &milestone.tasks {
                    let result = engine.request_transition(
                        &progress,
                        TransitionRequest::new("oi-prop", task.id.clone(), target),
                    );
                    let is_locked = matches!(result, Err(TrackerError::MilestoneLocked { .. }));
                    prop_assert!(is_locked);
                }
            }
        }

        /// Property: request_transition never mutates its input
        #[test]
        fn test_request_transition_never_mutates(
            progress in any_progress(),
            target in any_target(),
        ) {
            let engine: ProgressionEngine = ProgressionEngine::default();
            let original = progress.clone();
            for id in all_task_ids(&progress) {
                let request = TransitionRequest::new("oi-prop", id, target);
                let _ = engine.request_transition(&progress, request);
            }
            prop_assert_eq!(progress, original);
        }

        /// Property: a cancelled task accepts no target at all
        #[test]
        fn test_cancelled_rejects_everything(
            target in any_target(),
            rest in prop::collection::vec(any_milestone_shape(), 0..3),
        ) {
            let mut shapes = vec![(false, vec![TaskStatus::Cancelled])];
            shapes.extend(rest);
            let progress = build(&shapes);
            let engine: ProgressionEngine = ProgressionEngine::default();

            let err = engine
                .request_transition(&progress, TransitionRequest::new("oi-prop", "m0-t0", target))
                .unwrap_err();
            let is_invalid = matches!(
                err,
                TrackerError::InvalidTransition { current: TaskStatus::Cancelled, .. }
            );
            prop_assert!(is_invalid);
        }

        /// Property: reopening and reclosing a finished task restores status and progress
        #[test]
        fn test_reopen_reclose_is_idempotent(progress in any_progress()) {
            let engine: ProgressionEngine = ProgressionEngine::default();
            let sorted = sort_by_sequence(&progress.milestones);
            let active = compute_progress(&progress.milestones).active_milestone_index;
            let before = overall_progress(&progress.milestones);

            for milestone in sorted.iter().take(active + 1) {
                for task in milestone.tasks.iter().filter(|t| {
                    matches!(t.status, TaskStatus::Done | TaskStatus::Pass | TaskStatus::Fail)
                }) {
                    let reopen =
                        TransitionRequest::new("oi-prop", task.id.clone(), TaskStatus::InProgress);
                    let reopened = engine.request_transition(&progress, reopen).unwrap();
                    let reclose = TransitionRequest::new("oi-prop", task.id.clone(), task.status);
                    let reclosed = engine.request_transition(&reopened.progress, reclose).unwrap();
                    prop_assert_eq!(reclosed.overall_progress, before);

                    let statuses: Vec<TaskStatus> = reclosed
                        .progress
                        .milestones
                        .iter()
                        .flat_map(|m| m.tasks.iter().map(|t| t.status))
                        .collect();
                    let expected: Vec<TaskStatus> = sorted
                        .iter()
                        .flat_map(|m| m.tasks.iter().map(|t| t.status))
                        .collect();
                    prop_assert_eq!(statuses, expected);
                }
            }
        }
    }

    // ===== WARRANTY =====

    proptest! {
        /// Property: a claim needs a fee iff some item reached the threshold
        #[test]
        fn test_needs_fee_matches_any_item(
            rounds in prop::collection::vec(1u32..6, 0..6),
            threshold in 1u32..6,
        ) {
            let items: Vec<WarrantyClaimItem> = rounds
                .iter()
                .enumerate()
                .map(|(i, r)| WarrantyClaimItem::new(format!("oi-{}", i), *r))
                .collect();
            let decision = evaluate_warranty_fee(&items, threshold);
            prop_assert_eq!(decision.needs_fee, rounds.iter().any(|r| *r >= threshold));
            prop_assert_eq!(decision.items.len(), rounds.len());
        }
    }
}
