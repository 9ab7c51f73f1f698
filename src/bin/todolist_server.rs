//! Runs the task tracking web service.
//!
//! Usage:
//!
//! ```text
//! todolist-server [--bind 127.0.0.1:8080] [--database-url postgres://...]
//! ```
//!
//! Without a database URL, tasks live in memory and vanish on exit. With one,
//! the `tasks` table is created on start when missing.

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use todolist::{
    config::ServerConfig,
    http,
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, TaskPgPool, apply_schema},
        },
        ports::TaskRepository,
        services::TaskService,
    },
    telemetry,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    telemetry::init_tracing(&config.log_filter)?;

    match config.database_url.as_deref() {
        Some(url) => {
            let pool = connect(url, config.pool_size).await?;
            serve(&config, PostgresTaskRepository::new(pool)).await
        }
        None => {
            warn!("no database URL configured, tasks are kept in memory");
            serve(&config, InMemoryTaskRepository::new()).await
        }
    }
}

async fn connect(url: &str, pool_size: u32) -> Result<TaskPgPool, BoxError> {
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder().max_size(pool_size).build(manager)?;
    let bootstrap_pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), BoxError> {
        let mut connection = bootstrap_pool.get()?;
        apply_schema(&mut connection)?;
        Ok(())
    })
    .await??;
    info!(pool_size, "connected to PostgreSQL");
    Ok(pool)
}

async fn serve<R>(config: &ServerConfig, repository: R) -> Result<(), BoxError>
where
    R: TaskRepository + 'static,
{
    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    let app = http::router(service);
    let listener = TcpListener::bind(config.bind).await?;
    info!(address = %config.bind, postgres = config.uses_postgres(), "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
