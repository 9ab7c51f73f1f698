//! HTTP surface for task tracking.
//!
//! Routes translate requests into [`TaskService`] calls. Successful calls
//! answer `200` with JSON or a CSV attachment; every failure answers `400`
//! with a `{"description": ...}` body.

pub mod dto;
pub mod error;
pub mod handlers;

use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use mockable::Clock;
use std::sync::Arc;

/// Builds the task API router around a service.
pub fn router<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let state = AppState {
        service: Arc::new(service),
    };
    Router::new()
        .route("/tasks/create", post(handlers::create_task::<R, C>))
        .route("/tasks/end-task", post(handlers::end_task::<R, C>))
        .route("/tasks/task-list", get(handlers::task_list::<R, C>))
        .route("/tasks/completed-tasks", get(handlers::completed_tasks::<R, C>))
        .route(
            "/tasks/calculate-completed",
            post(handlers::calculate_completed::<R, C>),
        )
        .with_state(state)
}
