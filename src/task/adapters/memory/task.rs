//! In-memory repository for task tracking.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{DayWindow, NewTask, PageRequest, Task, TaskId},
    ports::{TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially from one. The per-day name check in
/// [`TaskRepository::store`] runs under the write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn storage_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn page_bounds(page: Option<PageRequest>) -> (usize, usize) {
    page.map_or((0, usize::MAX), |page| {
        (
            usize::try_from(page.skip()).unwrap_or(usize::MAX),
            usize::try_from(page.page_size()).unwrap_or(usize::MAX),
        )
    })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(storage_error)?;

        let window = DayWindow::containing(task.created_at());
        let taken = state.tasks.values().any(|existing| {
            existing.name() == task.name() && window.contains(existing.created_at())
        });
        if taken {
            return Err(TaskRepositoryError::DuplicateName(task.name().clone()));
        }

        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| storage_error("task identifier space exhausted"))?;
        let id = TaskId::new(next).map_err(TaskRepositoryError::persistence)?;
        state.last_id = next;

        let stored = task.into_task(id);
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(storage_error)?;
        let existing = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        if task.is_done() {
            existing.complete();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(storage_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find(
        &self,
        query: &TaskQuery,
        page: Option<PageRequest>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(storage_error)?;
        let (skip, take) = page_bounds(page);
        Ok(state
            .tasks
            .values()
            .filter(|task| query.matches(task))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn count(&self, query: &TaskQuery) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(storage_error)?;
        let matching = state
            .tasks
            .values()
            .filter(|task| query.matches(task))
            .count();
        u64::try_from(matching).map_err(TaskRepositoryError::persistence)
    }
}
