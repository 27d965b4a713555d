//! Unified error handling for Stitch Core.
//!
//! [`StitchError`] wraps domain and application errors and forwards their
//! user-actionable suggestions and categories.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stitch Core operations.
///
/// Every failure is deterministic given the same inputs, so nothing here is
/// retried.
#[derive(Debug, Error, Clone)]
pub enum StitchError {
    /// Errors from the domain layer (parsing, markers, anchors).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rendering, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl StitchError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
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
pub type StitchResult<T> = Result<T, StitchError>;
