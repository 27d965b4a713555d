// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `StitchError`, which is `Clone`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid attribute '{spec}': {reason}")]
    InvalidAttribute { spec: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("marker {marker:?} not found in {path}")]
    MarkerNotFound { path: String, marker: String },

    #[error("setup target not found in {path}: tried {}", format_anchors(.attempted))]
    AnchorNotFound { path: String, attempted: Vec<String> },
}

fn format_anchors(attempted: &[String]) -> String {
    attempted
        .iter()
        .map(|a| format!("{a:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAttribute { spec, reason } => vec![
                format!("Could not parse '{}': {}", spec, reason),
                "Attributes are written as name:type, e.g. age:int or nickname:nulls.string"
                    .into(),
                "The type may be omitted and defaults to string".into(),
            ],
            Self::MarkerNotFound { path, marker } => vec![
                format!("The generated file {} has no line containing {:?}", path, marker),
                "The template tree is out of sync with the field injection marker".into(),
                "Please report this issue".into(),
            ],
            Self::AnchorNotFound { path, attempted } => {
                let mut out = vec![format!("None of these lines were found in {}:", path)];
                out.extend(attempted.iter().map(|a| format!("  • {}", a)));
                out.push("Add one of them back where the app is configured, then re-run".into());
                out
            }
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Template paths must be relative to the project root".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAttribute { .. } => ErrorCategory::Validation,
            Self::MarkerNotFound { .. } | Self::AnchorNotFound { .. } => ErrorCategory::NotFound,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
