//! The built-in project template: starter files plus the packages they need.
//!
//! Adapters load a [`ProjectTemplate`] once; the pipeline only reads it.
//! Construction validates that every file lands at a distinct, contained
//! path after the rename table has been applied.

use std::collections::HashSet;
use std::path::PathBuf;

use super::common::RelativePath;
use super::install_plan::DependencySet;
use crate::domain::{error::DomainError, rename};

/// A template file's bytes, compiled into the binary with `include_bytes!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSource(&'static [u8]);

impl TemplateSource {
    pub fn as_bytes(&self) -> &'static [u8] {
        self.0
    }
}

impl From<&'static [u8]> for TemplateSource {
    fn from(bytes: &'static [u8]) -> Self {
        Self(bytes)
    }
}

impl From<&'static str> for TemplateSource {
    fn from(text: &'static str) -> Self {
        Self(text.as_bytes())
    }
}

/// A single file of the template, stored under its template-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: RelativePath,
    pub contents: TemplateSource,
}

impl TemplateFile {
    pub fn new(path: RelativePath, contents: impl Into<TemplateSource>) -> Self {
        Self {
            path,
            contents: contents.into(),
        }
    }

    /// Path relative to the project root after the rename table.
    pub fn destination(&self) -> PathBuf {
        rename::materialized_path(self.path.as_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTemplate {
    name: String,
    dependencies: DependencySet,
    files: Vec<TemplateFile>,
}

impl ProjectTemplate {
    pub fn new(
        name: impl Into<String>,
        dependencies: DependencySet,
        files: Vec<TemplateFile>,
    ) -> Result<Self, DomainError> {
        let template = Self {
            name: name.into(),
            dependencies,
            files,
        };
        template.validate()?;
        Ok(template)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidTemplate(
                "Template name cannot be empty".into(),
            ));
        }

        if self.files.is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "Template '{}' has no files",
                self.name
            )));
        }

        // Two sources renaming onto one destination would silently overwrite.
        let mut seen = HashSet::new();
        for file in &self.files {
            let destination = file.destination();
            if !seen.insert(destination.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: destination.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
