// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the recovery controller holds on to them across a retry)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Could not create a project called \"{name}\" because of npm naming restrictions")]
    InvalidProjectName { name: String, problems: Vec<String> },

    #[error("Project path has no final component: {path}")]
    MissingProjectName { path: String },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Template path must be relative and stay inside the project: {path}")]
    UnsafeTemplatePath { path: String },

    #[error("Unknown package manager: {0}")]
    UnknownPackageManager(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { problems, .. } => {
                problems.iter().map(|p| format!("  * {p}")).collect()
            }
            Self::MissingProjectName { .. } => vec![
                "Pass a directory such as `my-app`".into(),
            ],
            Self::UnknownPackageManager(_) => vec!["Supported package managers: npm, yarn".into()],
            Self::InvalidTemplate(_) | Self::DuplicatePath { .. } => vec![
                "The built-in template is corrupted".into(),
                "Please report this issue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::MissingProjectName { .. }
            | Self::UnknownPackageManager(_) => ErrorCategory::Validation,
            Self::InvalidTemplate(_)
            | Self::DuplicatePath { .. }
            | Self::UnsafeTemplatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
