//! Error types for milestone-tracker
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::schemas::TaskStatus;

/// Result type alias for milestone-tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Main error type for all milestone-tracker operations
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The referenced task does not exist in the order item's milestones
    #[error("Task {task_id} not found in order item {order_item_id}")]
    TaskNotFound {
        order_item_id: String,
        task_id: String,
    },

    /// The task's milestone has an incomplete predecessor
    #[error("Milestone {milestone_sequence} is locked until earlier milestones are complete")]
    MilestoneLocked { milestone_sequence: i32 },

    /// The target status is not reachable from the current status
    #[error("Invalid transition from {current} to {target}")]
    InvalidTransition {
        current: TaskStatus,
        target: TaskStatus,
    },

    /// A note or image was supplied with a non-terminal target
    #[error("Attachments are only accepted on terminal transitions, not {target}")]
    AttachmentNotAllowed { target: TaskStatus },

    /// Milestone/task structure violates the data model
    #[error("Malformed progression: {0}")]
    MalformedProgression(String),

    /// Warranty claim requires a fee but none was supplied
    #[error("Warranty claim requires a fee amount")]
    MissingFeeAmount,

    /// Warranty claim carries a negative fee
    #[error("Invalid fee amount: {0}")]
    InvalidFeeAmount(i64),

    /// Warranty claim failed submission validation
    #[error("Invalid warranty claim: {0}")]
    InvalidClaim(String),

    /// Order item id cannot be used as a file name
    #[error("Invalid order item id: {0:?}")]
    InvalidOrderItemId(String),

    /// An order item with this id is already stored
    #[error("Order item {0} is already registered")]
    OrderItemExists(String),

    /// Repository not found - no .milestones directory
    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::TaskNotFound { .. } => "TASK_NOT_FOUND",
            TrackerError::MilestoneLocked { .. } => "MILESTONE_LOCKED",
            TrackerError::InvalidTransition { .. } => "INVALID_TRANSITION",
            TrackerError::AttachmentNotAllowed { .. } => "ATTACHMENT_NOT_ALLOWED",
            TrackerError::MalformedProgression(_) => "MALFORMED_PROGRESSION",
            TrackerError::MissingFeeAmount => "MISSING_FEE_AMOUNT",
            TrackerError::InvalidFeeAmount(_) => "INVALID_FEE_AMOUNT",
            TrackerError::InvalidClaim(_) => "INVALID_CLAIM",
            TrackerError::InvalidOrderItemId(_) => "INVALID_ORDER_ITEM_ID",
            TrackerError::OrderItemExists(_) => "ORDER_ITEM_EXISTS",
            TrackerError::RepoNotFound(_) => "REPO_NOT_FOUND",
            TrackerError::InvalidJson(_) => "INVALID_JSON",
            TrackerError::FileNotFound(_) => "FILE_NOT_FOUND",
            TrackerError::ConfigError(_) => "CONFIG_ERROR",
            TrackerError::Io(_) => "IO_ERROR",
        }
    }

    /// Whether the error was caused by the request rather than the environment.
    ///
    /// Request errors are corrected by the caller and resubmitted; nothing
    /// in this crate retries them.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            TrackerError::TaskNotFound { .. }
                | TrackerError::MilestoneLocked { .. }
                | TrackerError::InvalidTransition { .. }
                | TrackerError::AttachmentNotAllowed { .. }
                | TrackerError::MissingFeeAmount
                | TrackerError::InvalidFeeAmount(_)
                | TrackerError::InvalidClaim(_)
                | TrackerError::InvalidOrderItemId(_)
                | TrackerError::OrderItemExists(_)
        )
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &TrackerError) -> i32 {
    if error.is_request_error() {
        2
    } else {
        1
    }
}
