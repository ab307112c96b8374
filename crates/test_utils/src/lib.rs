//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! instant handler test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known instants and raw values used across tests
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Assertion helpers for instants and conversion errors
//! - `generators`: Property-based test data generators
//! - `logging`: One-time tracing subscriber setup for tests

pub mod fixtures;
pub mod database;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
pub use logging::*;
