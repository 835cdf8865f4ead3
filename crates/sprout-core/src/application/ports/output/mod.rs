//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from the host. The
//! `sprout-adapters` crate provides the implementations.

use std::path::Path;

use crate::application::events::ScaffoldEvent;
use crate::domain::{ExistingEntry, InstallPlan, ProjectTemplate};
use crate::error::{SproutError, SproutResult};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether new entries can be created inside `dir`.
    ///
    /// Leaves no trace behind; a missing directory is not writable.
    fn is_writable(&self, dir: &Path) -> bool;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Top-level entries of a directory, in no particular order.
    fn list_dir(&self, path: &Path) -> SproutResult<Vec<ExistingEntry>>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, contents: &[u8]) -> SproutResult<()>;
}

/// Port for the single built-in template.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    fn load(&self) -> SproutResult<ProjectTemplate>;
}

/// Port for the package-manager subprocess.
///
/// Called at most twice per run, runtime group first. A registry or network
/// failure must surface as `ApplicationError::DownloadFailed`; every other
/// failure as `ApplicationError::CommandFailed`.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInstaller: Send + Sync {
    /// Install `plan` into the project at `root`, updating its descriptor.
    fn install(&self, root: &Path, plan: &InstallPlan) -> SproutResult<()>;

    /// Whether the package registry is reachable.
    fn is_online(&self) -> bool;
}

/// Port for the version-control tool.
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryInitializer: Send + Sync {
    /// Returns `Ok(false)` when the project is already under version control.
    fn init(&self, root: &Path) -> SproutResult<bool>;
}

/// Port for user-facing progress reporting.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ScaffoldEvent);
}

/// Port for the yes/no decision after a recoverable failure.
#[cfg_attr(test, mockall::automock)]
pub trait RecoveryPrompt: Send + Sync {
    /// `true` to run the pipeline once more.
    fn confirm_fallback(&self, error: &SproutError) -> bool;
}
