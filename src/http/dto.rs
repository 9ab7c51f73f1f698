//! Request and response bodies for the task API.

use crate::task::domain::{PageRequest, ParsePriorityError, Priority, TaskFilter};
use serde::{Deserialize, Serialize};

/// Body of `POST /tasks/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskBody {
    /// Task name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Task priority.
    pub priority: Priority,
}

/// Body of `POST /tasks/end-task`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndTaskBody {
    /// Identifier of the task to complete.
    pub id: i64,
}

/// Query string of `GET /tasks/task-list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListQuery {
    /// Exact name to match.
    pub name: Option<String>,
    /// Priority to match; blank means any.
    pub priority: Option<String>,
    /// Number of matching tasks to skip.
    pub skip: Option<u64>,
    /// Page size.
    pub page_size: Option<u64>,
}

impl TryFrom<TaskListQuery> for TaskFilter {
    type Error = ParsePriorityError;

    fn try_from(query: TaskListQuery) -> Result<Self, Self::Error> {
        let paging = PageRequest::new(
            query.skip.unwrap_or_default(),
            query.page_size.unwrap_or(PageRequest::DEFAULT_PAGE_SIZE),
        );
        let mut filter = Self::new().with_paging(paging);
        if let Some(name) = query.name {
            filter = filter.with_name(name);
        }
        if let Some(raw) = query.priority.filter(|raw| !raw.trim().is_empty()) {
            filter = filter.with_priority(Priority::try_from(raw.as_str())?);
        }
        Ok(filter)
    }
}

/// Confirmation or error description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionResponse {
    /// Human-readable outcome.
    pub description: String,
}

impl DescriptionResponse {
    /// Wraps a description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Listing wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Listed items.
    pub data: Vec<T>,
    /// Number of items across all pages, when the listing is paged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}
