//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! domain rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template in the tree has malformed syntax or an unresolved name.
    #[error("failed to render {path}: {reason}")]
    RenderingFailed { path: String, reason: String },

    /// The file a recipe patches does not exist in the project.
    #[error("setup file not found: {}", path.display())]
    TargetNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The template tree could not be enumerated.
    #[error("Template source error: {reason}")]
    TemplateSource { reason: String },

    /// Lock poisoned in an in-memory adapter.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { path, .. } => vec![
                format!("The template for {} is broken", path),
                "If you use --templates, check the template syntax".into(),
                "Otherwise this is a bug in the bundled templates, please report it".into(),
            ],
            Self::TargetNotFound { path } => vec![
                format!("Expected an existing file at {}", path.display()),
                "Run stitch from the root of the application, or pass --root".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and you have write permissions".into(),
            ],
            Self::TemplateSource { .. } => vec![
                "Check the --templates directory or STITCH_TEMPLATES_DIR".into(),
            ],
            Self::StoreLockError => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::TargetNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::TemplateSource { .. } => ErrorCategory::Configuration,
        }
    }
}
