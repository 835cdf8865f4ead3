//! npm / yarn subprocess installer.
//!
//! Each install runs the package manager in the project root with stdout
//! passed through to the terminal. stderr is captured so a failure can be
//! classified, then echoed.

use std::fmt;
use std::io::{self, Write};
use std::net::ToSocketAddrs;
use std::path::Path;
use std::process::{Command, Stdio};

use sprout_core::{
    application::{ApplicationError, ports::DependencyInstaller},
    domain::{InstallPlan, PackageManager},
    error::SproutResult,
};
use tracing::{debug, info, instrument, warn};

/// Environment every install runs with.
pub const INSTALL_ENV: &[(&str, &str)] = &[
    ("ADBLOCK", "1"),
    ("NODE_ENV", "development"),
    ("DISABLE_OPENCOLLECTIVE", "1"),
];

/// Host resolved to decide whether yarn can reach its registry.
const YARN_REGISTRY_HOST: &str = "registry.yarnpkg.com";

/// stderr fragments that mark a failure as a connectivity problem.
const NETWORK_MARKERS: &[&str] = &[
    "ENOTFOUND",
    "ETIMEDOUT",
    "ECONNREFUSED",
    "ECONNRESET",
    "EAI_AGAIN",
    "network",
];

/// Program and arguments for one install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl InstallCommand {
    pub fn for_plan(plan: &InstallPlan) -> Self {
        let flags = plan.flags();
        let mut args: Vec<String> = match flags.package_manager {
            PackageManager::Npm => {
                let save = if flags.is_dev_group() {
                    "--save-dev"
                } else {
                    "--save"
                };
                ["install", save, "--save-exact", "--loglevel", "error"]
                    .into_iter()
                    .map(String::from)
                    .collect()
            }
            PackageManager::Yarn => {
                let mut args = vec!["add".to_string(), "--exact".to_string()];
                if !flags.online {
                    args.push("--offline".into());
                }
                if flags.is_dev_group() {
                    args.push("--dev".into());
                }
                args
            }
        };
        args.extend(plan.packages().iter().cloned());

        Self {
            program: flags.package_manager.as_str(),
            args,
        }
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

/// Map a failed install's stderr to the matching error.
pub fn classify_failure(command: &InstallCommand, stderr: &str) -> ApplicationError {
    match NETWORK_MARKERS
        .iter()
        .copied()
        .find(|marker| stderr.contains(marker))
    {
        Some(marker) => ApplicationError::DownloadFailed {
            command: command.to_string(),
            reason: stderr
                .lines()
                .find(|line| line.contains(marker))
                .unwrap_or(marker)
                .trim()
                .to_string(),
        },
        None => ApplicationError::CommandFailed {
            command: command.to_string(),
        },
    }
}

/// Installs packages by shelling out to `npm` or `yarn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageManagerInstaller;

impl PackageManagerInstaller {
    pub fn new() -> Self {
        Self
    }

    fn resolves(host: &str) -> bool {
        (host, 443)
            .to_socket_addrs()
            .is_ok_and(|mut addrs| addrs.next().is_some())
    }

    /// Host of the configured HTTPS proxy, if any.
    fn proxy_host() -> Option<String> {
        let proxy = ["https_proxy", "HTTPS_PROXY"]
            .iter()
            .find_map(|key| std::env::var(key).ok())
            .filter(|value| !value.trim().is_empty())?;

        let without_scheme = proxy.split("://").last()?;
        let authority = without_scheme.split('/').next()?;
        let host_port = authority.rsplit('@').next()?;
        let host = host_port.split(':').next()?;
        (!host.is_empty()).then(|| host.to_string())
    }
}

impl DependencyInstaller for PackageManagerInstaller {
    #[instrument(skip_all, fields(root = %root.display(), group = %plan.group()))]
    fn install(&self, root: &Path, plan: &InstallPlan) -> SproutResult<()> {
        let command = InstallCommand::for_plan(plan);
        info!(command = %command, "Running installer");

        let output = Command::new(command.program)
            .args(&command.args)
            .current_dir(root)
            .envs(INSTALL_ENV.iter().copied())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                warn!(error = %e, "Installer could not be started");
                ApplicationError::CommandFailed {
                    command: command.to_string(),
                }
            })?;

        let _ = io::stderr().write_all(&output.stderr);

        if output.status.success() {
            debug!("Installer finished");
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let error = classify_failure(&command, &stderr);
        warn!(status = ?output.status.code(), error = %error, "Installer failed");
        Err(error.into())
    }

    fn is_online(&self) -> bool {
        if Self::resolves(YARN_REGISTRY_HOST) {
            return true;
        }
        // Behind a proxy the registry itself may not resolve locally.
        Self::proxy_host().is_some_and(|host| Self::resolves(&host))
    }
}
