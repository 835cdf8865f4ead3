use indexmap::IndexSet;

use crate::domain::value_objects::{DependencyGroup, PackageManager};

/// Ordered package names for both dependency groups of a template.
///
/// Insertion order is install and display order. Duplicates collapse to the
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    runtime: IndexSet<String>,
    dev: IndexSet<String>,
}

impl DependencySet {
    pub fn new<R, D>(runtime: R, dev: D) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            runtime: runtime.into_iter().map(Into::into).collect(),
            dev: dev.into_iter().map(Into::into).collect(),
        }
    }

    pub fn group(&self, group: DependencyGroup) -> &IndexSet<String> {
        match group {
            DependencyGroup::Runtime => &self.runtime,
            DependencyGroup::Dev => &self.dev,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.dev.is_empty()
    }
}

/// How the installer should behave for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallFlags {
    pub package_manager: PackageManager,
    pub online: bool,
    pub group: DependencyGroup,
}

impl InstallFlags {
    pub fn uses_alternate_package_manager(&self) -> bool {
        self.package_manager.is_alternate()
    }

    pub fn is_dev_group(&self) -> bool {
        self.group.is_dev()
    }
}

/// One installer invocation: a group of packages plus its flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    packages: IndexSet<String>,
    flags: InstallFlags,
}

impl InstallPlan {
    /// The two plans of a run, runtime first.
    pub fn sequence(
        dependencies: &DependencySet,
        package_manager: PackageManager,
        online: bool,
    ) -> [InstallPlan; 2] {
        [DependencyGroup::Runtime, DependencyGroup::Dev].map(|group| InstallPlan {
            packages: dependencies.group(group).clone(),
            flags: InstallFlags {
                package_manager,
                online,
                group,
            },
        })
    }

    pub fn packages(&self) -> &IndexSet<String> {
        &self.packages
    }

    pub fn flags(&self) -> InstallFlags {
        self.flags
    }

    pub fn group(&self) -> DependencyGroup {
        self.flags.group
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
