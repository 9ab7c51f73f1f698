//! Mapping of service errors onto HTTP responses.

use super::dto::DescriptionResponse;
use crate::task::{
    adapters::report::TaskExportError, domain::ParsePriorityError, services::TaskServiceError,
};
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Error returned by task API handlers.
///
/// Every failure is answered with `400 Bad Request` and a JSON
/// `{"description": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    /// Response status.
    pub status: StatusCode,
    /// Description sent to the caller.
    pub description: String,
}

impl ApiError {
    /// Creates a `400 Bad Request` error.
    #[must_use]
    pub fn bad_request(description: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            description: description.into(),
        }
    }

    /// Creates the error answered for an id that names no task.
    #[must_use]
    pub fn unknown_task(id: i64) -> Self {
        Self::bad_request(format!("task {id} not found"))
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<ParsePriorityError> for ApiError {
    fn from(err: ParsePriorityError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<TaskExportError> for ApiError {
    fn from(err: TaskExportError) -> Self {
        error!(error = %err, "task report export failed");
        Self::bad_request("internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(DescriptionResponse::new(self.description))).into_response()
    }
}
