pub mod common;
pub mod descriptor;
pub mod install_plan;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use descriptor::ProjectDescriptor;
pub use install_plan::{DependencySet, InstallFlags, InstallPlan};
pub use request::ProjectRequest;
pub use template::{ProjectTemplate, TemplateFile, TemplateSource};
