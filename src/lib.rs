//! milestone-tracker - Production task progression for made-to-order items
//!
//! This library provides:
//! - Schema definitions for milestones, tasks, order item progressions and warranty claims
//! - The progression engine: milestone unlocking, task state machines, aggregate progress
//! - The quality-check classifier and the warranty fee policy
//! - A single-writer service that persists progressions as JSON files
//! - The CLI used to inspect and drive stored progressions

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod workflow;

// Re-export commonly used types
pub use domain::{
    compute_progress, evaluate_warranty_fee, validate_warranty_claim, ProgressionEngine,
    TransitionOutcome, TransitionRequest,
};
pub use errors::{Result, TrackerError};
pub use schemas::{Config, Milestone, MilestoneKind, OrderItemProgress, Task, TaskStatus};
