//! HTTP handlers for the task API.

use super::{
    dto::{CreateTaskBody, DataResponse, DescriptionResponse, EndTaskBody, TaskListQuery},
    error::ApiError,
};
use crate::task::{
    adapters::report::{report_file_name, write_task_report},
    domain::{TaskCompletedViewModel, TaskFilter, TaskId, TaskViewModel},
    ports::TaskRepository,
    services::{CreateTaskRequest, TASK_COMPLETED, TASK_CREATED, TaskService},
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::header,
    response::{IntoResponse, Response},
};
use mockable::Clock;
use std::sync::Arc;

/// Shared handler dependencies.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task service backing every endpoint.
    pub service: Arc<TaskService<R, C>>,
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// `POST /tasks/create`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed bodies, invalid fields, duplicate names
/// and store failures.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<Json<DescriptionResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let mut request = CreateTaskRequest::new(body.name, body.priority);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    state.service.create(request).await?;
    Ok(Json(DescriptionResponse::new(TASK_CREATED)))
}

/// `POST /tasks/end-task`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed bodies, unknown tasks and store
/// failures.
pub async fn end_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<EndTaskBody>, JsonRejection>,
) -> Result<Json<DescriptionResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    // No stored task has a non-positive id.
    let id = TaskId::new(body.id).map_err(|_| ApiError::unknown_task(body.id))?;
    state.service.end_task(id).await?;
    Ok(Json(DescriptionResponse::new(TASK_COMPLETED)))
}

/// `GET /tasks/task-list`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed query strings and store failures.
pub async fn task_list<R, C>(
    State(state): State<AppState<R, C>>,
    query: Result<Query<TaskListQuery>, QueryRejection>,
) -> Result<Json<DataResponse<TaskViewModel>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(query) = query?;
    let filter = TaskFilter::try_from(query)?;
    let page = state.service.get_tasks(&filter).await?;
    Ok(Json(DataResponse {
        data: page.items,
        total: Some(page.total),
    }))
}

/// `GET /tasks/completed-tasks`
///
/// # Errors
///
/// Returns [`ApiError`] when the store fails.
pub async fn completed_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<DataResponse<TaskCompletedViewModel>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let data = state.service.get_completed_tasks().await?;
    Ok(Json(DataResponse { data, total: None }))
}

/// `POST /tasks/calculate-completed`
///
/// Answers with today's completed tasks as a CSV attachment.
///
/// # Errors
///
/// Returns [`ApiError`] when the store fails or the report cannot be encoded.
pub async fn calculate_completed<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Response, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let rows = state.service.calculate_completed_tasks().await?;
    let body = write_task_report(&rows)?;
    let file_name = report_file_name(state.service.today().date());
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
    ];
    Ok((headers, body).into_response())
}
