//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`PromptError`] which covers every failure mode of
//! promptline. None of these errors ever reach the shell: the program's
//! contract is to always render *some* prompt and exit 0, so every error is
//! downgraded at the call site to "omit this segment" or "show a sentinel",
//! with a debug-level log entry for diagnosis.
//!
//! # Public API
//! - [`PromptError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PromptError>`
//!
//! # Error Categories
//! - **Git subprocess**: launch failures, non-zero exit status
//! - **Configuration**: config directory lookup, file read, JSON parse
//! - **I/O**: stdout write failures during rendering

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for promptline
#[derive(Error, Debug)]
pub enum PromptError {
    // Git subprocess errors
    #[error("Failed to launch git: {source}")]
    GitLaunchFailed { source: std::io::Error },

    #[error("git status exited unsuccessfully: {stderr}")]
    GitStatusFailed { stderr: String },

    #[error("git status produced non-UTF-8 output")]
    GitOutputNotUtf8,

    // Configuration errors
    #[error("Could not determine config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using PromptError
pub type Result<T> = std::result::Result<T, PromptError>;

impl PromptError {
    /// Create a git launch failed error
    pub fn git_launch_failed(source: std::io::Error) -> Self {
        Self::GitLaunchFailed { source }
    }

    /// Create a git status failed error from captured stderr
    pub fn git_status_failed(stderr: impl Into<String>) -> Self {
        Self::GitStatusFailed {
            stderr: stderr.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
