//! Domain value objects: ProjectName, PackageManager, DependencyGroup.
//!
//! Pure value types: equality-by-value, no identity. Each one owns its
//! string representation and its `FromStr` parser.

use crate::domain::error::DomainError;
use crate::domain::validation::{NameValidation, NameValidator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A project name that passed [`NameValidator`].
///
/// Invariant: only constructible through [`ProjectName::parse`], so a
/// descriptor can never be built from an unvalidated name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        match NameValidator::validate(&name) {
            NameValidation::Valid => Ok(Self(name)),
            NameValidation::Invalid { problems } => {
                Err(DomainError::InvalidProjectName { name, problems })
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// The package manager used to install dependencies and run scripts.
///
/// `Npm` is the default; `Yarn` is the alternate selected by `--use-yarn`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    /// Pick the package manager from the `--use-yarn` style boolean.
    pub const fn from_alternate(use_alternate: bool) -> Self {
        if use_alternate { Self::Yarn } else { Self::Npm }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    pub const fn is_alternate(&self) -> bool {
        matches!(self, Self::Yarn)
    }

    /// Command line a user types to run a descriptor script.
    ///
    /// npm needs `run` for anything but its own lifecycle aliases (`start`,
    /// `test`); yarn resolves every script directly.
    pub fn run_command(&self, script: &str) -> String {
        match (self, script) {
            (Self::Npm, "start" | "test") => format!("npm {script}"),
            (Self::Npm, _) => format!("npm run {script}"),
            (Self::Yarn, _) => format!("yarn {script}"),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            other => Err(DomainError::UnknownPackageManager(other.to_string())),
        }
    }
}

// ── DependencyGroup ──────────────────────────────────────────────────────────

/// Which section of the descriptor an install targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyGroup {
    Runtime,
    Dev,
}

impl DependencyGroup {
    /// Descriptor key the installer records resolved versions under.
    pub const fn descriptor_key(&self) -> &'static str {
        match self {
            Self::Runtime => "dependencies",
            Self::Dev => "devDependencies",
        }
    }

    pub const fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_keeps_validated_text() {
        let name = ProjectName::parse("my-app").unwrap();
        assert_eq!(name.as_str(), "my-app");
        assert_eq!(name.to_string(), "my-app");
    }

    #[test]
    fn project_name_rejects_with_itemized_problems() {
        match ProjectName::parse("My App") {
            Err(DomainError::InvalidProjectName { name, problems }) => {
                assert_eq!(name, "My App");
                assert_eq!(problems.len(), 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn package_manager_parses_case_insensitively() {
        assert_eq!("npm".parse::<PackageManager>().unwrap(), PackageManager::Npm);
        assert_eq!("Yarn".parse::<PackageManager>().unwrap(), PackageManager::Yarn);
        assert!("pnpm".parse::<PackageManager>().is_err());
    }

    #[test]
    fn alternate_flag_selects_yarn() {
        assert_eq!(PackageManager::from_alternate(false), PackageManager::Npm);
        assert_eq!(PackageManager::from_alternate(true), PackageManager::Yarn);
    }

    #[test]
    fn npm_needs_run_except_for_lifecycle_scripts() {
        assert_eq!(PackageManager::Npm.run_command("dev"), "npm run dev");
        assert_eq!(PackageManager::Npm.run_command("build"), "npm run build");
        assert_eq!(PackageManager::Npm.run_command("start"), "npm start");
        assert_eq!(PackageManager::Yarn.run_command("dev"), "yarn dev");
        assert_eq!(PackageManager::Yarn.run_command("start"), "yarn start");
    }

    #[test]
    fn dependency_group_keys() {
        assert_eq!(DependencyGroup::Runtime.descriptor_key(), "dependencies");
        assert_eq!(DependencyGroup::Dev.descriptor_key(), "devDependencies");
        assert!(DependencyGroup::Dev.is_dev());
    }
}
