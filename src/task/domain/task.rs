//! Task entity and its pre-insert form.

use super::{Priority, TaskDescription, TaskId, TaskName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A task that has been validated but not yet stored.
///
/// The store assigns the identifier through [`NewTask::into_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    name: TaskName,
    description: Option<TaskDescription>,
    priority: Priority,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates an incomplete task stamped with the current clock time.
    #[must_use]
    pub fn new(
        name: TaskName,
        description: Option<TaskDescription>,
        priority: Priority,
        clock: &impl Clock,
    ) -> Self {
        Self {
            name,
            description,
            priority,
            created_at: clock.utc(),
        }
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Turns this value into a stored task with the given identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            priority: self.priority,
            is_done: false,
            created_at: self.created_at,
        }
    }
}

/// Task entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: Option<TaskDescription>,
    priority: Priority,
    is_done: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted completion flag.
    pub is_done: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            priority: data.priority,
            is_done: data.is_done,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the task as completed.
    ///
    /// Returns `false` when the task was already completed, in which case
    /// nothing changes. Completion cannot be undone.
    pub const fn complete(&mut self) -> bool {
        if self.is_done {
            return false;
        }
        self.is_done = true;
        true
    }
}
