//! Application services for task tracking.

mod tasks;

pub use tasks::{
    CreateTaskRequest, TASK_COMPLETED, TASK_CREATED, TaskService, TaskServiceError,
    TaskServiceResult,
};
