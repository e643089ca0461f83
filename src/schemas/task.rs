//! Task schema - A single unit of work within a milestone

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a production task
///
/// Standard tasks use `Pending`, `InProgress`, `Done` and `Cancelled`.
/// Tasks inside a quality-check milestone use `Pending`, `InProgress`,
/// `Pass` and `Fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Pending,
    /// Work has started
    InProgress,
    /// Work finished
    Done,
    /// Work abandoned; cannot be reopened
    Cancelled,
    /// Quality check passed
    Pass,
    /// Quality check failed
    Fail,
}

impl TaskStatus {
    /// Terminal statuses count towards milestone completion and progress.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::Done | TaskStatus::Cancelled | TaskStatus::Pass | TaskStatus::Fail
        )
    }

    /// Statuses that may carry a completion note or image.
    pub fn accepts_attachment(self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Pass | TaskStatus::Fail)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "PENDING"),
            TaskStatus::InProgress => write!(f, "IN_PROGRESS"),
            TaskStatus::Done => write!(f, "DONE"),
            TaskStatus::Cancelled => write!(f, "CANCELLED"),
            TaskStatus::Pass => write!(f, "PASS"),
            TaskStatus::Fail => write!(f, "FAIL"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "PENDING" => Ok(TaskStatus::Pending),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            "CANCELLED" => Ok(TaskStatus::Cancelled),
            "PASS" => Ok(TaskStatus::Pass),
            "FAIL" => Ok(TaskStatus::Fail),
            _ => Err(format!("Unknown task status: {}", s)),
        }
    }
}

/// Completion evidence attached when a task enters a terminal status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Reference to an uploaded media asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Attachment {
    pub fn is_empty(&self) -> bool {
        self.note.is_none() && self.image.is_none()
    }
}

/// A task within a milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier, unique within the order item
    pub id: String,

    /// Display name
    pub name: String,

    /// Display description
    #[serde(default)]
    pub description: String,

    /// Execution order within the milestone (ascending)
    pub sequence_order: i32,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// Note recorded on the last terminal transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Image reference recorded on the last terminal transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// RFC 3339 timestamp of the last applied transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: impl Into<String>, name: impl Into<String>, sequence_order: i32) -> Self {
        Task {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            sequence_order,
            status: TaskStatus::Pending,
            note: None,
            image: None,
            updated_at: None,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Task with the given status, without touching the timestamp
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Return a new Task with the given description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Return a new Task moved to `status`, recording the attachment and,
    /// when given, the time of the change.
    ///
    /// An empty attachment leaves any previous note/image in place.
    pub fn transitioned(
        mut self,
        status: TaskStatus,
        attachment: Option<Attachment>,
        at: Option<DateTime<Utc>>,
    ) -> Self {
        self.status = status;
        if let Some(attachment) = attachment {
            if attachment.note.is_some() {
                self.note = attachment.note;
            }
            if attachment.image.is_some() {
                self.image = attachment.image;
            }
        }
        if let Some(at) = at {
            self.updated_at = Some(at.to_rfc3339());
        }
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
