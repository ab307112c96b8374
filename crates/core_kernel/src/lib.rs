//! Core Kernel - Foundational temporal types
//!
//! This crate provides the value types shared by the database layer and its callers:
//! - `Instant`: an immutable point on the UTC timeline with no offset attached
//! - `CoreError`: errors raised while constructing or parsing those values

pub mod error;
pub mod instant;

pub use error::CoreError;
pub use instant::Instant;
