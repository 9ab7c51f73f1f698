//! Repository port for task persistence and lookup.

use crate::task::domain::{DayWindow, NewTask, PageRequest, Priority, Task, TaskId, TaskName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Criteria for retrieving tasks. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Completion flag to match.
    pub is_done: Option<bool>,
    /// Exact name to match.
    pub name: Option<TaskName>,
    /// Priority to match.
    pub priority: Option<Priority>,
    /// Day within which the task must have been created.
    pub created_within: Option<DayWindow>,
}

impl TaskQuery {
    /// Creates a query matching every task.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches tasks with the given completion flag.
    #[must_use]
    pub const fn with_done(mut self, is_done: bool) -> Self {
        self.is_done = Some(is_done);
        self
    }

    /// Matches tasks with exactly this name.
    #[must_use]
    pub fn with_name(mut self, name: TaskName) -> Self {
        self.name = Some(name);
        self
    }

    /// Matches tasks with this priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Matches tasks created within the given day.
    #[must_use]
    pub const fn created_within(mut self, window: DayWindow) -> Self {
        self.created_within = Some(window);
        self
    }

    /// Returns whether `task` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.is_done.is_none_or(|done| task.is_done() == done)
            && self.name.as_ref().is_none_or(|name| task.name() == name)
            && self
                .priority
                .is_none_or(|priority| task.priority() == priority)
            && self
                .created_within
                .is_none_or(|window| window.contains(task.created_at()))
    }
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateName`] when a task with the
    /// same name was already created on the same calendar day.
    async fn store(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Persists the completion flag of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns tasks matching `query` in ascending identifier order, limited
    /// to `page` when given.
    async fn find(
        &self,
        query: &TaskQuery,
        page: Option<PageRequest>,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts tasks matching `query`, ignoring paging.
    async fn count(&self, query: &TaskQuery) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same name already exists on the same day.
    #[error("duplicate task name for the day: {0}")]
    DuplicateName(TaskName),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
