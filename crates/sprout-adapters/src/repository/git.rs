//! `git` command-line repository initializer.

use std::path::Path;
use std::process::{Command, Stdio};

use sprout_core::{
    application::{ApplicationError, ports::RepositoryInitializer},
    error::SproutResult,
};
use tracing::{debug, instrument, warn};

pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit from sprout";

/// Initializes a repository with an initial commit on `main`.
///
/// Skips projects that already live inside a git work tree or a Mercurial
/// repository. If a step after `git init` fails, the new `.git` directory
/// is removed again.
#[derive(Debug, Clone)]
pub struct GitCliInitializer {
    program: String,
    commit_message: String,
}

impl GitCliInitializer {
    pub fn new() -> Self {
        Self {
            program: "git".into(),
            commit_message: DEFAULT_COMMIT_MESSAGE.into(),
        }
    }

    /// Use a different `git` executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn git(&self, root: &Path, args: &[&str]) -> SproutResult<()> {
        let status = Command::new(&self.program)
            .args(args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                debug!(?args, code = ?status.code(), "git exited unsuccessfully");
                Err(self.failed(args))
            }
            Err(e) => {
                debug!(?args, error = %e, "git could not be started");
                Err(self.failed(args))
            }
        }
    }

    fn failed(&self, args: &[&str]) -> sprout_core::error::SproutError {
        ApplicationError::CommandFailed {
            command: format!("{} {}", self.program, args.join(" ")),
        }
        .into()
    }

    fn inside_git_work_tree(&self, root: &Path) -> bool {
        self.git(root, &["rev-parse", "--is-inside-work-tree"]).is_ok()
    }

    fn inside_mercurial_repository(root: &Path) -> bool {
        Command::new("hg")
            .args(["--cwd", ".", "root"])
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn commit_initial_tree(&self, root: &Path) -> SproutResult<()> {
        self.git(root, &["checkout", "-b", "main"])?;
        self.git(root, &["add", "-A"])?;
        self.git(root, &["commit", "-m", self.commit_message.as_str()])
    }
}

impl Default for GitCliInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryInitializer for GitCliInitializer {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn init(&self, root: &Path) -> SproutResult<bool> {
        if self.inside_git_work_tree(root) || Self::inside_mercurial_repository(root) {
            debug!("Already under version control");
            return Ok(false);
        }

        self.git(root, &["init"])?;

        if let Err(e) = self.commit_initial_tree(root) {
            let dot_git = root.join(".git");
            if let Err(cleanup) = std::fs::remove_dir_all(&dot_git) {
                warn!(path = %dot_git.display(), error = %cleanup, "Could not remove partial repository");
            }
            return Err(e);
        }

        Ok(true)
    }
}
