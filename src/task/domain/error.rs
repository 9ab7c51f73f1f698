//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyName,

    /// The task name exceeds the accepted length.
    #[error("task name is {actual} characters long, at most {max} are allowed")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// The task description exceeds the accepted length.
    #[error("task description is {actual} characters long, at most {max} are allowed")]
    DescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),
}

/// Error returned while parsing priorities from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
