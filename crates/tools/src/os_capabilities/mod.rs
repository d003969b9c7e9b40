//! Structured OS capability layer - replaces ad-hoc shell calls
//!
//! This module groups the OS operations the front-end relies on:
//! - Filesystem and path helpers
//! - Desktop integration (file manager)
//! - Application icon discovery
//! - System power control

pub mod desktop;
pub mod filesystem;
pub mod icons;
pub mod system;

/// OS capability error types
#[derive(Debug, thiserror::Error)]
pub enum OsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OsResult<T> = Result<T, OsError>;
