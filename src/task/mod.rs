//! Task tracking.
//!
//! Tasks are created with a name that must be unique within the calendar day,
//! listed while open, completed once, and reported as CSV at the end of the
//! day. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
