//! Shared world state for task lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use crate::test_helpers::{ManualClock, morning};
use rstest::fixture;
use todolist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, ManualClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub service: TestTaskService,
    pub clock: Arc<ManualClock>,
    pub tasks: HashMap<String, Task>,
    pub last_create_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world whose clock starts on a fixed morning.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::at(morning()));
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&clock),
        );

        Self {
            service,
            clock,
            tasks: HashMap::new(),
            last_create_result: None,
        }
    }

    /// Looks up a task created earlier in the scenario.
    pub fn task_named(&self, name: &str) -> Result<&Task, eyre::Report> {
        self.tasks
            .get(name)
            .ok_or_else(|| eyre::eyre!("no task named {name:?} in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
