//! Error handling for the sprout CLI.
//!
//! Every failure ends up here as a [`CliError`], which knows how to render
//! itself for the terminal and which exit code to return.  Core errors keep
//! their own classification ([`Diagnostic`]); the CLI only decides how each
//! shape is printed.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use sprout_core::domain::DomainError;
use sprout_core::error::{Diagnostic, ErrorCategory as CoreCategory, SproutError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// No project directory was given and none could be prompted for.
    #[error("Please specify the project directory:")]
    MissingProjectDirectory,

    /// The working directory could not be resolved.
    #[error("Could not resolve the project path {path}")]
    UnresolvablePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file or variable could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `sprout-core` or the adapters.
    #[error(transparent)]
    Core(#[from] SproutError),

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

/// The lines of a rendered error, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Report {
    headline: String,
    details: Vec<String>,
    chain: Vec<String>,
    hint: bool,
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProjectDirectory => vec![
                "  sprout <project-directory>".into(),
                String::new(),
                "For example:".into(),
                "  sprout my-app".into(),
                String::new(),
                "Run sprout --help to see all options.".into(),
            ],
            Self::UnresolvablePath { .. } => vec![
                "Check that the current directory still exists".into(),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check SPROUT_* environment variables".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that the terminal is still attached".into()],
        }
    }

    /// Get the error category for logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProjectDirectory | Self::UnresolvablePath { .. } => {
                ErrorCategory::UserError
            }
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Command | CoreCategory::Network => ErrorCategory::Command,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.  Every failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    fn report(&self, verbose: bool) -> Report {
        let chain = || {
            let mut lines = Vec::new();
            let mut source = self.source();
            while let Some(err) = source {
                lines.push(err.to_string());
                source = err.source();
            }
            lines
        };

        match self {
            Self::Core(core) => match core.diagnostic() {
                Diagnostic::Validation => Report {
                    headline: self.to_string(),
                    details: self.suggestions(),
                    chain: if verbose { chain() } else { Vec::new() },
                    hint: false,
                },
                Diagnostic::CommandFailed { command } => Report {
                    headline: "Aborting installation.".into(),
                    details: vec![format!("  {command} has failed.")],
                    chain: if verbose { vec![self.to_string()] } else { Vec::new() },
                    hint: !verbose,
                },
                Diagnostic::Unexpected => Report {
                    headline: "Aborting installation.".into(),
                    details: vec![
                        "Unexpected error. Please report it as a bug:".into(),
                        format!("  {self}"),
                    ],
                    chain: chain(),
                    hint: false,
                },
            },
            Self::MissingProjectDirectory => Report {
                headline: self.to_string(),
                details: self.suggestions(),
                chain: Vec::new(),
                hint: false,
            },
            _ => Report {
                headline: self.to_string(),
                details: self.suggestions(),
                chain: if verbose { chain() } else { Vec::new() },
                hint: !verbose,
            },
        }
    }

    /// Format the error for a colour terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        let report = self.report(verbose);
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            "\u{2717}".red().bold(), // ✗
            report.headline.red().bold()
        ));

        for line in &report.details {
            output.push_str(&format!("{line}\n"));
        }

        for err in &report.chain {
            output.push_str(&format!("  {} {}\n", "\u{2192}".dimmed(), err.dimmed()));
        }

        if report.hint {
            output.push_str(&format!(
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output.push('\n');
        output
    }

    /// Plain-text version of [`Self::format_colored`]; no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let report = self.report(verbose);
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", report.headline));

        for line in &report.details {
            out.push_str(&format!("{line}\n"));
        }

        for err in &report.chain {
            out.push_str(&format!("  Caused by: {err}\n"));
        }

        if report.hint {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out.push('\n');
        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::info!("User error: {}", self),
            ErrorCategory::Command => tracing::error!("Command failed: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected input: bad name, occupied directory, missing argument.
    UserError,
    /// An external command (package manager) failed.
    Command,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
