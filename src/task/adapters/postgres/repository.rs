//! `PostgreSQL` repository implementation for task storage.

use super::{
    CREATE_TASKS_SQL,
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        NewTask, PageRequest, PersistedTaskData, Priority, Task, TaskDescription, TaskId, TaskName,
    },
    ports::{TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

const NAME_PER_DAY_INDEX: &str = "idx_tasks_name_per_day";

/// Creates the `tasks` table and indexes when they do not exist yet.
///
/// This is a blocking operation that should be called from `spawn_blocking`
/// or a synchronous context.
///
/// # Errors
///
/// Returns the Diesel error when the statements fail.
pub fn apply_schema(connection: &mut PgConnection) -> Result<(), DieselError> {
    connection.batch_execute(CREATE_TASKS_SQL)
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let name = task.name().clone();
        let new_row = to_new_row(&task);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_name_per_day_violation(info.as_ref()) =>
                    {
                        TaskRepositoryError::DuplicateName(name.clone())
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let is_done = task.is_done();

        self.run_blocking(move |connection| {
            // Only the completion flag is mutable; name, priority and creation
            // time stay as inserted.
            let affected = diesel::update(tasks::table.find(task_id.value()))
                .set(tasks::is_done.eq(is_done))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find(
        &self,
        query: &TaskQuery,
        page: Option<PageRequest>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let query = query.clone();
        self.run_blocking(move |connection| {
            let mut statement = filtered(&query).order(tasks::id.asc());
            if let Some(page) = page {
                let offset =
                    i64::try_from(page.skip()).map_err(TaskRepositoryError::persistence)?;
                let limit =
                    i64::try_from(page.page_size()).map_err(TaskRepositoryError::persistence)?;
                statement = statement.offset(offset).limit(limit);
            }
            let rows = statement
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count(&self, query: &TaskQuery) -> TaskRepositoryResult<u64> {
        let query = query.clone();
        self.run_blocking(move |connection| {
            let total = filtered(&query)
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

/// Builds the `WHERE` clause for a task query.
fn filtered(query: &TaskQuery) -> tasks::BoxedQuery<'static, Pg> {
    let mut statement = tasks::table.into_boxed();
    if let Some(is_done) = query.is_done {
        statement = statement.filter(tasks::is_done.eq(is_done));
    }
    if let Some(name) = &query.name {
        statement = statement.filter(tasks::name.eq(name.as_str().to_owned()));
    }
    if let Some(priority) = query.priority {
        statement = statement.filter(tasks::priority.eq(priority.as_str()));
    }
    if let Some(window) = query.created_within {
        statement = statement
            .filter(tasks::created_at.ge(window.start()))
            .filter(tasks::created_at.lt(window.end()));
    }
    statement
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        name: task.name().as_str().to_owned(),
        description: task
            .description()
            .map(|description| description.as_str().to_owned()),
        priority: task.priority().as_str().to_owned(),
        is_done: false,
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        name,
        description,
        priority,
        is_done,
        created_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        name: TaskName::new(name).map_err(TaskRepositoryError::persistence)?,
        description: description
            .map(TaskDescription::new)
            .transpose()
            .map_err(TaskRepositoryError::persistence)?
            .flatten(),
        priority: Priority::try_from(priority.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        is_done,
        created_at,
    };
    Ok(Task::from_persisted(data))
}

fn is_name_per_day_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == NAME_PER_DAY_INDEX)
}
