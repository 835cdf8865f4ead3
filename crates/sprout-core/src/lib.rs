//! Sprout Core - domain rules and the scaffolding pipeline.
//!
//! This crate holds everything about creating a project that does not
//! touch the host directly, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprout-cli (CLI)             │
//! │  arguments, prompts, output, exit code  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │ (RecoveryController → ScaffoldService)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, Installer, Repository, …)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sprout-adapters (Infrastructure)     │
//! │  (LocalFilesystem, npm/yarn, git CLI)   │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer: ProjectName, rename table, allow-list, descriptor
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprout_core::prelude::*;
//!
//! let request = ProjectRequest::new("/work/my-app", PackageManager::Npm)?;
//! let service = ScaffoldService::new(filesystem, templates, installer, repository, progress);
//! let controller = RecoveryController::new(Box::new(service), prompt);
//! let report = controller.run(&request).into_result()?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, RecoveryController, RecoveryRun, RecoveryState, ScaffoldEvent,
        ScaffoldOptions, ScaffoldReport, ScaffoldService,
        ports::{
            DependencyInstaller, Filesystem, ProgressSink, ProjectCreator, RecoveryPrompt,
            RepositoryInitializer, TemplateStore,
        },
    };
    pub use crate::domain::{
        Attempt, DependencyGroup, DependencySet, DomainError, ExistingEntry, InstallPlan,
        NameValidation, NameValidator, PackageManager, ProjectName, ProjectRequest,
        ProjectTemplate, RelativePath, TemplateFile, TemplateSource,
    };
    pub use crate::error::{Diagnostic, SproutError, SproutResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
