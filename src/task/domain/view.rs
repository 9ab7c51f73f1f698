//! Presentation-shaped projections of tasks.

use super::Task;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label shown for completed tasks.
pub const DONE_LABEL: &str = "Done";
/// Label shown for open tasks.
pub const NOT_DONE_LABEL: &str = "Not done";

/// Formats a date the long way, e.g. `Wednesday, 14 October 2026`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Display projection used by the task list and the CSV report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskViewModel {
    /// Task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Description, empty when absent.
    pub description: String,
    /// Completion label.
    pub is_done: String,
    /// Priority display name.
    pub priority: String,
    /// Long-form creation date.
    pub created: String,
}

impl From<&Task> for TaskViewModel {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            name: task.name().as_str().to_owned(),
            description: description_text(task),
            is_done: if task.is_done() {
                DONE_LABEL
            } else {
                NOT_DONE_LABEL
            }
            .to_owned(),
            priority: task.priority().display_name().to_owned(),
            created: long_date(task.created_at().date_naive()),
        }
    }
}

/// Minimal projection of a completed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCompletedViewModel {
    /// Task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Description, empty when absent.
    pub description: String,
}

impl From<&Task> for TaskCompletedViewModel {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            name: task.name().as_str().to_owned(),
            description: description_text(task),
        }
    }
}

/// One page of the open-task listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPage {
    /// Tasks on this page.
    pub items: Vec<TaskViewModel>,
    /// Number of tasks matching the filter across all pages.
    pub total: u64,
}

fn description_text(task: &Task) -> String {
    task.description()
        .map(|description| description.as_str().to_owned())
        .unwrap_or_default()
}
