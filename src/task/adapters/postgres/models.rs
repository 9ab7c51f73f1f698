//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority storage form.
    pub priority: String,
    /// Completion flag.
    pub is_done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority storage form.
    pub priority: String,
    /// Completion flag.
    pub is_done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
