//! Schema types for milestone-tracker
//!
//! Progression types use the camelCase field names of the order-management API.

mod config;
mod milestone;
mod task;
mod warranty;

pub use config::Config;
pub use milestone::{Milestone, MilestoneKind, OrderItemProgress};
pub use task::{Attachment, Task, TaskStatus};
pub use warranty::{WarrantyClaim, WarrantyClaimItem};
