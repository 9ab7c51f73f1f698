//! Service layer for task creation, completion, listing and reporting.

use crate::task::{
    domain::{
        DayWindow, NewTask, Priority, Task, TaskCompletedViewModel, TaskDescription,
        TaskDomainError, TaskFilter, TaskId, TaskName, TaskPage, TaskViewModel,
    },
    ports::{TaskQuery, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Confirmation returned to callers after a successful create.
pub const TASK_CREATED: &str = "Task created";
/// Confirmation returned to callers after a successful completion.
pub const TASK_COMPLETED: &str = "Task completed";

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    description: Option<String>,
    priority: Priority,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            description: None,
            priority,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task operations.
///
/// Display output is safe to hand to API callers: internal failures render a
/// fixed message and keep the repository error as the source.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// A task with the same name was already created today.
    #[error("a task named '{0}' already exists today")]
    Duplicate(TaskName),

    /// The task does not exist.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The store failed.
    #[error("internal server error")]
    Internal(#[source] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task business rules over a repository and a clock.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the window of the current calendar day.
    #[must_use]
    pub fn today(&self) -> DayWindow {
        DayWindow::containing(self.clock.utc())
    }

    /// Creates a task after checking that its name is unused today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for invalid input,
    /// [`TaskServiceError::Duplicate`] when the name is taken today, or
    /// [`TaskServiceError::Internal`] when the store fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let name = TaskName::new(&request.name)?;
        let description = request
            .description
            .as_deref()
            .map(TaskDescription::new)
            .transpose()?
            .flatten();
        info!(name = %name, priority = %request.priority, "task creation requested");

        let same_name_today = TaskQuery::all()
            .with_name(name.clone())
            .created_within(self.today());
        let existing = self
            .repository
            .count(&same_name_today)
            .await
            .map_err(|err| internal("create", err))?;
        if existing > 0 {
            debug!(name = %name, "rejecting duplicate task name");
            return Err(TaskServiceError::Duplicate(name));
        }

        let new_task = NewTask::new(name, description, request.priority, &*self.clock);
        let task = self.repository.store(new_task).await.map_err(|err| match err {
            TaskRepositoryError::DuplicateName(name) => TaskServiceError::Duplicate(name),
            other => internal("create", other),
        })?;

        info!(
            id = %task.id(),
            name = %task.name(),
            created_at = %task.created_at(),
            "task created"
        );
        Ok(task)
    }

    /// Marks a task as completed.
    ///
    /// Completing an already completed task succeeds without writing again.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Internal`] when the store fails.
    pub async fn end_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|err| internal("end_task", err))?
            .ok_or(TaskServiceError::NotFound(id))?;

        if !task.complete() {
            debug!(id = %id, "task already completed");
            return Ok(task);
        }

        self.repository
            .update(&task)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(missing) => TaskServiceError::NotFound(missing),
                other => internal("end_task", other),
            })?;
        info!(id = %id, name = %task.name(), "task completed");
        Ok(task)
    }

    /// Lists open tasks matching the filter, one page at a time.
    ///
    /// The returned total counts every open task matching the name and
    /// priority restrictions, across all pages.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Internal`] when the store fails.
    pub async fn get_tasks(&self, filter: &TaskFilter) -> TaskServiceResult<TaskPage> {
        let mut query = TaskQuery::all().with_done(false);
        if let Some(raw) = filter.name() {
            match TaskName::new(raw) {
                Ok(name) => query = query.with_name(name),
                // No stored task can carry a name that fails validation.
                Err(_) => {
                    return Ok(TaskPage {
                        items: Vec::new(),
                        total: 0,
                    });
                }
            }
        }
        if let Some(priority) = filter.priority() {
            query = query.with_priority(priority);
        }

        let tasks = self
            .repository
            .find(&query, Some(filter.paging()))
            .await
            .map_err(|err| internal("get_tasks", err))?;
        let total = self
            .repository
            .count(&query)
            .await
            .map_err(|err| internal("get_tasks", err))?;

        Ok(TaskPage {
            items: tasks.iter().map(TaskViewModel::from).collect(),
            total,
        })
    }

    /// Lists tasks created today that have been completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Internal`] when the store fails.
    pub async fn get_completed_tasks(&self) -> TaskServiceResult<Vec<TaskCompletedViewModel>> {
        let tasks = self.completed_today("get_completed_tasks").await?;
        Ok(tasks.iter().map(TaskCompletedViewModel::from).collect())
    }

    /// Collects today's completed tasks as display rows for the CSV report.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Internal`] when the store fails.
    pub async fn calculate_completed_tasks(&self) -> TaskServiceResult<Vec<TaskViewModel>> {
        let tasks = self.completed_today("calculate_completed_tasks").await?;
        Ok(tasks.iter().map(TaskViewModel::from).collect())
    }

    async fn completed_today(&self, operation: &'static str) -> TaskServiceResult<Vec<Task>> {
        let query = TaskQuery::all()
            .with_done(true)
            .created_within(self.today());
        self.repository
            .find(&query, None)
            .await
            .map_err(|err| internal(operation, err))
    }
}

fn internal(operation: &'static str, err: TaskRepositoryError) -> TaskServiceError {
    error!(operation, error = %err, "task repository failure");
    TaskServiceError::Internal(err)
}
