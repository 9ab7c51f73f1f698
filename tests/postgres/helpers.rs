//! Template and per-test database handles for `PostgreSQL` tests.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use pg_embedded_setup_unpriv::TestCluster;
use std::process;
use std::sync::atomic::{AtomicU32, Ordering};
use todolist::task::adapters::postgres::{PostgresTaskRepository, apply_schema};
use tokio::runtime::Runtime;

/// Template database holding the migrated `tasks` table.
pub const TEMPLATE_DB: &str = "todolist_test_template";

static NEXT_DATABASE: AtomicU32 = AtomicU32::new(0);

/// Creates a tokio runtime for driving the async repository.
pub fn test_runtime() -> eyre::Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Ensures the template database exists with the task schema applied.
fn ensure_template(cluster: &TestCluster) -> eyre::Result<()> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            apply_schema(&mut conn).map_err(|e| eyre::eyre!("{e}"))?;
            Ok(())
        })
        .map_err(|e| eyre::eyre!("template setup: {e}"))
}

/// A repository bound to a private database that is dropped with the handle.
pub struct TestDatabase {
    pub repository: PostgresTaskRepository,
    cluster: &'static TestCluster,
    name: String,
}

impl TestDatabase {
    /// Clones the template into a fresh database and connects a pool to it.
    pub fn create(cluster: &'static TestCluster) -> eyre::Result<Self> {
        ensure_template(cluster)?;
        let name = format!(
            "todolist_test_{}_{}",
            process::id(),
            NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
        );
        cluster
            .create_database_from_template(name.as_str(), TEMPLATE_DB)
            .map_err(|e| eyre::eyre!("create {name}: {e}"))?;
        let url = cluster.connection().database_url(&name);
        let pool = Pool::builder()
            .max_size(4)
            .build(ConnectionManager::<PgConnection>::new(url));
        match pool {
            Ok(pool) => Ok(Self {
                repository: PostgresTaskRepository::new(pool),
                cluster,
                name,
            }),
            Err(err) => {
                drop_quietly(cluster, &name);
                Err(err.into())
            }
        }
    }
}

fn drop_quietly(cluster: &TestCluster, name: &str) {
    if let Err(e) = cluster.drop_database(name) {
        eprintln!("Warning: failed to drop test database {name}: {e}");
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        drop_quietly(self.cluster, &self.name);
    }
}
