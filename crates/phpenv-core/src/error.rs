//! Unified error handling for Phpenv Core.
//!
//! Only *structural* failures surface here — a directory listing that
//! cannot be read, a seed file that cannot be written. Per-entry copy
//! failures during a tree merge are not errors at all; they are collected
//! in [`crate::merge::MergeReport`] and the merge keeps going.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Phpenv Core operations.
#[derive(Debug, Error, Clone)]
pub enum ScaffoldError {
    /// A filesystem operation failed in a way the scaffold cannot recover
    /// from (e.g. the scaffold root itself cannot be created).
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The merge source is not a readable directory.
    #[error("Source directory not readable: {path}")]
    SourceUnreadable { path: PathBuf },

    /// Adapter state access failed (lock poisoned, etc.).
    #[error("Filesystem adapter state error")]
    AdapterLock,

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::SourceUnreadable { path } => vec![
                format!("Cannot list directory: {}", path.display()),
                "Run phpenv from a directory you can read".into(),
            ],
            Self::AdapterLock => vec![
                "The filesystem adapter state is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in phpenv".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::SourceUnreadable { .. } => ErrorCategory::NotFound,
            Self::AdapterLock => ErrorCategory::Internal,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
