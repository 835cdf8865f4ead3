//! Application layer for sprout.
//!
//! This layer contains:
//! - **Services**: the scaffolding pipeline and the recovery controller
//! - **Ports**: traits for everything outside the process
//! - **Events**: progress reported while the pipeline runs
//! - **Errors**: application-specific error types
//!
//! The application layer sequences the domain rules but owns none of them.

pub mod error;
pub mod events;
pub mod ports;
pub mod services;

pub use services::{
    RecoveryController, RecoveryRun, RecoveryState, ScaffoldOptions, ScaffoldReport,
    ScaffoldService,
};

pub use ports::{
    DependencyInstaller, Filesystem, ProgressSink, ProjectCreator, RecoveryPrompt,
    RepositoryInitializer, TemplateStore,
};

pub use error::ApplicationError;
pub use events::ScaffoldEvent;
