//! Implementation of `sprout [PROJECT_DIRECTORY]`.
//!
//! Responsibility: settle on a target directory, build the request, wire
//! the adapters into the pipeline and render the outcome.

use std::io;
use std::path::{Component, PathBuf};

use tracing::{debug, info, instrument};

use sprout_adapters::{
    BuiltinTemplateStore, GitCliInitializer, LocalFilesystem, PackageManagerInstaller,
};
use sprout_core::prelude::{
    PackageManager, ProjectRequest, RecoveryController, ScaffoldOptions, ScaffoldReport,
    ScaffoldService,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{TerminalRecoveryPrompt, ask_project_directory},
};

/// Execute the create command.
///
/// Dispatch sequence:
/// 1. Take the directory argument, or prompt for one
/// 2. Resolve it to an absolute path and validate its name
/// 3. Run the pipeline under the recovery controller
/// 4. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let directory = cli
        .project_directory
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_owned)
        .or_else(|| ask_project_directory(&config.defaults.project_name))
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty())
        .ok_or(CliError::MissingProjectDirectory)?;

    let root = resolve_target(&directory).map_err(|source| CliError::UnresolvablePath {
        path: PathBuf::from(&directory),
        source,
    })?;

    let package_manager = if cli.use_yarn {
        PackageManager::Yarn
    } else {
        config.defaults.package_manager
    };

    let request = ProjectRequest::new(&root, package_manager)?;
    debug!(
        root = %request.target_path().display(),
        package_manager = %request.package_manager(),
        "Request resolved"
    );

    let options = ScaffoldOptions {
        skip_install: cli.skip_install,
    };
    let controller = build_controller(options, output.clone());
    let report = scaffold(&controller, &request)?;

    let cwd = std::env::current_dir()?;
    output.summary(&report, &cwd)?;

    Ok(())
}

/// Resolve `input` against the current directory, folding `..` lexically.
pub fn resolve_target(input: &str) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(input)?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

fn build_controller(options: ScaffoldOptions, output: OutputManager) -> RecoveryController {
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplateStore::new()),
        Box::new(PackageManagerInstaller::new()),
        Box::new(GitCliInitializer::new()),
        Box::new(output.clone()),
    )
    .with_options(options);

    RecoveryController::new(
        Box::new(service),
        Box::new(TerminalRecoveryPrompt::new(output)),
    )
}

fn scaffold(controller: &RecoveryController, request: &ProjectRequest) -> CliResult<ScaffoldReport> {
    let run = controller.run(request);
    info!(trail = ?run.trail, retried = run.retried(), "Pipeline finished");

    Ok(run.into_result()?)
}
