//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the pipeline, implemented in
//!   `sprout-adapters` (or the CLI, for the interactive ones)
//!   - `Filesystem`: directory probing and file writes
//!   - `TemplateStore`: the built-in template
//!   - `DependencyInstaller`: the package-manager subprocess
//!   - `RepositoryInitializer`: the version-control tool
//!   - `ProgressSink`: user-facing progress
//!   - `RecoveryPrompt`: the retry confirmation
//!
//! - **Driving (Input) Ports**: called by the outside world, implemented here
//!   - `ProjectCreator`: one run of the pipeline

pub mod input;
pub mod output;

pub use input::ProjectCreator;
pub use output::{
    DependencyInstaller, Filesystem, ProgressSink, RecoveryPrompt, RepositoryInitializer,
    TemplateStore,
};
