//! todolist: a small task tracking web service.
//!
//! Tasks are created with a name that is unique within the calendar day,
//! listed while open, completed once, and exported as a CSV report of the
//! day's completed work.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, CSV)
//!
//! # Modules
//!
//! - [`task`]: Task domain, persistence and services
//! - [`http`]: axum router exposing the task API
//! - [`config`]: Server configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
