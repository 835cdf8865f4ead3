//! Core domain layer for sprout.
//!
//! Pure rules with no I/O: which names are publishable, which files a target
//! directory may already hold, how template files are renamed, and what the
//! descriptor and install plans look like. Everything that touches the disk,
//! the network or a subprocess goes through the ports in
//! [`crate::application::ports`].

pub mod entities;
pub mod error;
pub mod rename;
pub mod validation;
pub mod value_objects;
pub mod workspace_policy;

pub use entities::{
    DependencySet, InstallFlags, InstallPlan, ProjectDescriptor, ProjectRequest, ProjectTemplate,
    TemplateFile, TemplateSource,
    common::RelativePath,
    descriptor::{DESCRIPTOR_FILE_NAME, LIFECYCLE_SCRIPTS},
};
pub use error::{DomainError, ErrorCategory};
pub use rename::{RENAME_TABLE, RenameRule};
pub use validation::{NameValidation, NameValidator};
pub use value_objects::{DependencyGroup, PackageManager, ProjectName};
pub use workspace_policy::{Attempt, ExistingEntry};
