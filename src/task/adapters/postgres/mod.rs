//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool, apply_schema};

/// Idempotent bootstrap SQL creating the `tasks` table and its indexes.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-14-000000_create_tasks/up.sql");
