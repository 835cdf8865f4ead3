//! Scaffold Service - the project creation pipeline.
//!
//! One call to [`ScaffoldService::create`] runs every stage in order:
//! 1. Check the target path (writable parent, no conflicting entries)
//! 2. Write the project descriptor
//! 3. Install runtime dependencies, then dev dependencies
//! 4. Copy the template tree, applying the rename table
//! 5. Initialize a repository (best-effort)
//!
//! Each stage's success gates the next; the first error ends the run.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ScaffoldEvent,
        ports::{
            DependencyInstaller, Filesystem, ProgressSink, ProjectCreator, RepositoryInitializer,
            TemplateStore,
        },
    },
    domain::{
        DESCRIPTOR_FILE_NAME, InstallPlan, PackageManager, ProjectDescriptor, ProjectName,
        ProjectRequest, ProjectTemplate,
        workspace_policy::{self, Attempt},
    },
    error::SproutResult,
};

/// Switches that change what a run does, not what it produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Leave both dependency groups uninstalled.
    pub skip_install: bool,
}

/// What a successful run created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub name: ProjectName,
    pub package_manager: PackageManager,
    pub files_written: usize,
    pub git_initialized: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateStore>,
    installer: Box<dyn DependencyInstaller>,
    repository: Box<dyn RepositoryInitializer>,
    progress: Box<dyn ProgressSink>,
    options: ScaffoldOptions,
}

impl ScaffoldService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateStore>,
        installer: Box<dyn DependencyInstaller>,
        repository: Box<dyn RepositoryInitializer>,
        progress: Box<dyn ProgressSink>,
    ) -> Self {
        Self {
            filesystem,
            templates,
            installer,
            repository,
            progress,
            options: ScaffoldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScaffoldOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the whole pipeline once for `request`.
    #[instrument(
        skip_all,
        fields(
            project = %request.name(),
            root = %request.target_path().display(),
            package_manager = %request.package_manager(),
            attempt = ?attempt
        )
    )]
    pub fn create(&self, request: &ProjectRequest, attempt: Attempt) -> SproutResult<ScaffoldReport> {
        let root = request.target_path();
        let template = self.templates.load()?;
        debug!(template = template.name(), files = template.file_count(), "Template loaded");

        self.check_target(root, attempt)?;

        self.progress.emit(ScaffoldEvent::Creating {
            root: root.to_path_buf(),
            package_manager: request.package_manager(),
        });

        self.write_descriptor(root, request.name())?;
        self.install_dependencies(root, request.package_manager(), &template)?;
        let files_written = self.materialize(root, &template)?;
        let git_initialized = self.init_repository(root);

        info!(files_written, git_initialized, "Project created");
        Ok(ScaffoldReport {
            root: root.to_path_buf(),
            name: request.name().clone(),
            package_manager: request.package_manager(),
            files_written,
            git_initialized,
        })
    }

    // -------------------------------------------------------------------------
    // Stages
    // -------------------------------------------------------------------------

    /// Nothing is created unless the parent is writable; the target is then
    /// created and must hold only tolerated entries.
    fn check_target(&self, root: &Path, attempt: Attempt) -> SproutResult<()> {
        let parent = root.parent().unwrap_or(root);
        if !self.filesystem.is_writable(parent) {
            return Err(ApplicationError::PathNotWritable {
                path: parent.to_path_buf(),
            }
            .into());
        }

        self.filesystem.create_dir_all(root)?;

        let entries = self.filesystem.list_dir(root)?;
        let conflicts = workspace_policy::conflicting_entries(&entries, attempt);
        if !conflicts.is_empty() {
            warn!(count = conflicts.len(), "Target directory has conflicting entries");
            return Err(ApplicationError::DirectoryNotEmpty {
                path: root.to_path_buf(),
                conflicts,
            }
            .into());
        }

        Ok(())
    }

    fn write_descriptor(&self, root: &Path, name: &ProjectName) -> SproutResult<()> {
        let json = ProjectDescriptor::new(name).to_pretty_json()?;
        let path = root.join(DESCRIPTOR_FILE_NAME);
        self.filesystem.write_file(&path, json.as_bytes())?;
        debug!(path = %path.display(), "Descriptor written");
        Ok(())
    }

    fn install_dependencies(
        &self,
        root: &Path,
        package_manager: PackageManager,
        template: &ProjectTemplate,
    ) -> SproutResult<()> {
        let dependencies = template.dependencies();
        if self.options.skip_install || dependencies.is_empty() {
            self.progress.emit(ScaffoldEvent::InstallSkipped);
            return Ok(());
        }

        // npm has no offline mode worth probing for.
        let online = !package_manager.is_alternate() || self.installer.is_online();
        if !online {
            self.progress.emit(ScaffoldEvent::Offline);
        }

        for plan in InstallPlan::sequence(dependencies, package_manager, online) {
            if plan.is_empty() {
                continue;
            }
            self.progress.emit(ScaffoldEvent::Installing {
                group: plan.group(),
                packages: plan.packages().iter().cloned().collect(),
            });
            self.installer.install(root, &plan)?;
            info!(group = %plan.group(), packages = plan.packages().len(), "Dependencies installed");
        }

        Ok(())
    }

    fn materialize(&self, root: &Path, template: &ProjectTemplate) -> SproutResult<usize> {
        for file in template.files() {
            let path = root.join(file.destination());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, file.contents.as_bytes())?;
        }

        let files = template.file_count();
        self.progress
            .emit(ScaffoldEvent::TemplateMaterialized { files });
        Ok(files)
    }

    fn init_repository(&self, root: &Path) -> bool {
        match self.repository.init(root) {
            Ok(true) => {
                self.progress.emit(ScaffoldEvent::RepositoryInitialized);
                true
            }
            Ok(false) => false,
            Err(e) => {
                debug!(error = %e, "Repository initialization skipped");
                false
            }
        }
    }
}

impl ProjectCreator for ScaffoldService {
    fn create(&self, request: &ProjectRequest, attempt: Attempt) -> SproutResult<ScaffoldReport> {
        ScaffoldService::create(self, request, attempt)
    }
}
