//! Infrastructure adapters for sprout.
//!
//! This crate implements the ports defined in `sprout-core::application::ports`.
//! It contains all process, network and disk I/O.

pub mod filesystem;
pub mod installer;
pub mod repository;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::PackageManagerInstaller;
pub use repository::GitCliInitializer;
pub use template_store::BuiltinTemplateStore;
