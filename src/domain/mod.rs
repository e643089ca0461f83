//! Domain logic for task states, milestone progression and warranty fees

mod progress;
mod quality;
mod states;
mod transitions;
mod validation;
mod warranty;

// Property-based tests (compiled only in test builds)
#[cfg(test)]
mod property_tests;

pub use progress::{
    active_milestone_index, compute_progress, is_unlocked, overall_progress, sort_by_sequence,
    MilestoneSummary, ProgressSnapshot,
};
pub use quality::{MilestoneClassifier, NameMarkerClassifier};
pub use states::{
    get_allowed_next_states, is_allowed_transition, is_valid_status, transition_table,
    valid_statuses, QUALITY_CHECK_STATUSES, QUALITY_CHECK_TRANSITIONS, STANDARD_STATUSES,
    STANDARD_TRANSITIONS,
};
pub use transitions::{ProgressionEngine, TransitionOutcome, TransitionRequest};
pub use validation::{can_enter_milestone, validate_progression, validate_transition};
pub use warranty::{
    evaluate_warranty_fee, item_needs_fee, validate_warranty_claim, ItemFeeDecision,
    ValidatedClaim, WarrantyFeeDecision,
};
