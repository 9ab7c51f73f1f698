//! Server configuration from command-line flags and the environment.

use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration of `todolist-server`.
///
/// Every flag can also be supplied through the environment variable named
/// next to it.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "todolist-server", version, about = "Task tracking web service")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TODOLIST_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL. Tasks are kept in memory when absent.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(
        long,
        env = "TODOLIST_POOL_SIZE",
        default_value_t = 8,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pool_size: u32,

    /// Tracing filter directive, e.g. `info` or `todolist=debug`.
    #[arg(long, env = "TODOLIST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    /// Returns whether tasks are persisted in `PostgreSQL`.
    #[must_use]
    pub const fn uses_postgres(&self) -> bool {
        self.database_url.is_some()
    }
}
