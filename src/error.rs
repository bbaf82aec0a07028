//! # Error Types
//!
//! This module defines error types used throughout the printstream library.
//!
//! The scanner itself never fails: every byte is either printable or one of
//! the four carriage controls. Errors only come from the edges (channel
//! configuration, reading the input, writing output).

use thiserror::Error;

/// Main error type for printstream operations
#[derive(Debug, Error)]
pub enum PrintStreamError {
    /// Rejected channel configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failure encoding an output event
    #[error("Output error: {0}")]
    Output(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PrintStreamError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            PrintStreamError::Io(err.into())
        } else {
            PrintStreamError::Output(err.to_string())
        }
    }
}
