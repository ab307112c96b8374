//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid instant '{input}': {reason}")]
    Parse {
        input: String,
        reason: String,
    },
}

impl CoreError {
    pub fn out_of_range(message: impl Into<String>) -> Self {
        CoreError::OutOfRange(message.into())
    }

    pub fn parse(input: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        CoreError::Parse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}
