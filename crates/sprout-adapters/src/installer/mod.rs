//! Dependency installer adapters.

mod package_manager;

pub use package_manager::{INSTALL_ENV, InstallCommand, PackageManagerInstaller, classify_failure};
