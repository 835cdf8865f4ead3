//! Unified error handling for sprout core.
//!
//! Wraps domain and application errors and classifies them for the two
//! decisions the caller has to make: may this failure be retried, and how
//! should it be reported.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for sprout core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SproutError {
    /// Errors from the domain layer (rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SproutError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in sprout".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Only a registry download failure may be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::DownloadFailed { .. })
        )
    }

    /// How the final report should present this error.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Self::Application(
                ApplicationError::CommandFailed { command }
                | ApplicationError::DownloadFailed { command, .. },
            ) => Diagnostic::CommandFailed {
                command: command.clone(),
            },
            _ if self.category() == ErrorCategory::Validation => Diagnostic::Validation,
            _ => Diagnostic::Unexpected,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Command,
    Network,
    Internal,
}

/// The shape of the final failure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Rejected input; the itemized reasons are the whole story.
    Validation,
    /// A named external command failed.
    CommandFailed { command: String },
    /// Anything else; the full error chain is shown.
    Unexpected,
}

/// Convenient result type alias.
pub type SproutResult<T> = Result<T, SproutError>;
