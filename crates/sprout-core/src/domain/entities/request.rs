use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{PackageManager, ProjectName},
};

/// Everything one run of the pipeline needs to know, resolved up front.
///
/// Immutable for the run and threaded by reference through every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    target_path: PathBuf,
    name: ProjectName,
    package_manager: PackageManager,
}

impl ProjectRequest {
    /// Build a request for an absolute target path.
    ///
    /// The project name is the path's final component and must pass the
    /// name validator; a path without one (e.g. `/`) is rejected.
    pub fn new(
        target_path: impl Into<PathBuf>,
        package_manager: PackageManager,
    ) -> Result<Self, DomainError> {
        let target_path = target_path.into();
        let name = target_path
            .file_name()
            .ok_or_else(|| DomainError::MissingProjectName {
                path: target_path.display().to_string(),
            })?;
        let name = name
            .to_str()
            .ok_or_else(|| DomainError::InvalidProjectName {
                name: name.to_string_lossy().into_owned(),
                problems: vec!["name can only contain URL-friendly characters".into()],
            })?;
        let name = ProjectName::parse(name)?;

        Ok(Self {
            target_path,
            name,
            package_manager,
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn uses_alternate_package_manager(&self) -> bool {
        self.package_manager.is_alternate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_comes_from_the_final_component() {
        let request = ProjectRequest::new("/work/apps/my-app", PackageManager::Npm).unwrap();
        assert_eq!(request.name().as_str(), "my-app");
        assert_eq!(request.target_path(), Path::new("/work/apps/my-app"));
        assert!(!request.uses_alternate_package_manager());
    }

    #[test]
    fn invalid_final_component_is_rejected() {
        let err = ProjectRequest::new("/work/My App", PackageManager::Yarn).unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn root_path_has_no_name() {
        let err = ProjectRequest::new("/", PackageManager::Npm).unwrap_err();
        assert!(matches!(err, DomainError::MissingProjectName { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_final_component_is_an_invalid_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let target = Path::new("/work").join(OsStr::from_bytes(b"app\xff"));
        let err = ProjectRequest::new(target, PackageManager::Npm).unwrap_err();

        match err {
            DomainError::InvalidProjectName { problems, .. } => assert_eq!(
                problems,
                vec!["name can only contain URL-friendly characters".to_string()]
            ),
            other => panic!("expected InvalidProjectName, got {other:?}"),
        }
    }
}
