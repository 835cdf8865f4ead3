//! Progress events emitted by the pipeline.

use std::path::PathBuf;

use crate::domain::{DependencyGroup, PackageManager};

/// What the pipeline is doing, for the progress sink to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// Gates passed; the project is about to be written.
    Creating {
        root: PathBuf,
        package_manager: PackageManager,
    },
    /// The registry is unreachable; installs use the local cache.
    Offline,
    /// One dependency group is about to be installed.
    Installing {
        group: DependencyGroup,
        packages: Vec<String>,
    },
    InstallSkipped,
    /// The template tree has been copied into the project.
    TemplateMaterialized { files: usize },
    RepositoryInitialized,
}
