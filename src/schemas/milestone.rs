//! Milestone schema - Ordered production phases for one order item

use serde::{Deserialize, Serialize};

use super::Task;

/// Which state machine governs the tasks of a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    /// DONE / CANCELLED tasks
    #[default]
    Standard,
    /// PASS / FAIL tasks
    QualityCheck,
}

impl std::fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MilestoneKind::Standard => write!(f, "standard"),
            MilestoneKind::QualityCheck => write!(f, "quality_check"),
        }
    }
}

/// An ordered phase of production for an order item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Phase order within the order item (ascending)
    pub sequence_order: i32,

    /// Display name, also inspected by the quality-check classifier
    pub name: String,

    /// Display description
    #[serde(default)]
    pub description: String,

    /// Tasks owned by this milestone
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Milestone {
    /// Create a new milestone without tasks
    pub fn new(name: impl Into<String>, sequence_order: i32) -> Self {
        Milestone {
            sequence_order,
            name: name.into(),
            description: String::new(),
            tasks: Vec::new(),
        }
    }

    /// Return a new Milestone with the task appended
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Return a new Milestone with the given description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// A milestone is complete when every task is terminal.
    ///
    /// Milestones without tasks are complete.
    pub fn is_complete(&self) -> bool {
        self.tasks.iter().all(|t| t.is_terminal())
    }

    /// Number of tasks in a terminal status
    pub fn completed_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_terminal()).count()
    }
}

/// The instantiated milestone sequence of one order item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemProgress {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// External order item reference
    pub order_item_id: String,

    /// Milestones owned by the order item
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

fn default_schema_version() -> u32 {
    1
}

impl OrderItemProgress {
    /// Create an empty progression for an order item
    pub fn new(order_item_id: impl Into<String>) -> Self {
        OrderItemProgress {
            schema_version: 1,
            order_item_id: order_item_id.into(),
            milestones: Vec::new(),
        }
    }

    /// Return a new progression with the milestone appended
    pub fn with_milestone(mut self, milestone: Milestone) -> Self {
        self.milestones.push(milestone);
        self
    }

    /// Total number of tasks across all milestones
    pub fn task_count(&self) -> usize {
        self.milestones.iter().map(|m| m.tasks.len()).sum()
    }
}
