//! Application layer errors.
//!
//! These errors represent failures while running the pipeline against the
//! outside world. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while the scaffolding pipeline runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The parent of the target directory cannot be written to.
    #[error("The application path is not writable: {path}")]
    PathNotWritable { path: PathBuf },

    /// The target directory holds entries outside the allow-list.
    #[error("The directory {path} contains files that could conflict")]
    DirectoryNotEmpty {
        path: PathBuf,
        conflicts: Vec<String>,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A named external command exited unsuccessfully or could not start.
    #[error("Command failed: {command}")]
    CommandFailed { command: String },

    /// The installer could not reach the package registry.
    #[error("Failed to download packages with `{command}`: {reason}")]
    DownloadFailed { command: String, reason: String },

    /// The template store returned something unusable.
    #[error("Template could not be loaded: {reason}")]
    TemplateInvalid { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathNotWritable { .. } => vec![
                "It is likely you do not have write permissions for this folder".into(),
                "Try using a different folder".into(),
            ],
            Self::DirectoryNotEmpty { conflicts, .. } => {
                let mut lines: Vec<String> = conflicts.iter().map(|c| format!("  {c}")).collect();
                lines.push(
                    "Either try using a new directory name, or remove the files listed above."
                        .into(),
                );
                lines
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::DownloadFailed { .. } => vec![
                "Check your network connection and proxy settings".into(),
                "Retry when the package registry is reachable".into(),
            ],
            Self::CommandFailed { command } => {
                vec![format!("Run `{command}` yourself to see the full output")]
            }
            Self::TemplateInvalid { .. } => vec!["Please report this issue".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathNotWritable { .. } | Self::DirectoryNotEmpty { .. } => {
                ErrorCategory::Validation
            }
            Self::CommandFailed { .. } => ErrorCategory::Command,
            Self::DownloadFailed { .. } => ErrorCategory::Network,
            Self::FilesystemError { .. } | Self::TemplateInvalid { .. } => ErrorCategory::Internal,
        }
    }
}
