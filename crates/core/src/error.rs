//! Error types for the Beacon event log
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Errors exist for the internal layers only: the public append/read surface
//! of the capped log converts every failure into a logged no-op, because the
//! log is best-effort telemetry and must never break the calling flow.

use std::io;
use thiserror::Error;

/// Result type alias for Beacon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Beacon event log
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Slot name rejected by a storage backend
    #[error("Invalid slot name: {0}")]
    InvalidSlot(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
