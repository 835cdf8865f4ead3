//! Output management and formatting.
//!
//! [`OutputManager`] is the terminal side of the pipeline's
//! [`ProgressSink`]: every [`ScaffoldEvent`] becomes a few lines on stdout,
//! and the final [`ScaffoldReport`] becomes the "next steps" summary.

use std::io;
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use tracing::debug;

use sprout_core::prelude::{ProgressSink, ScaffoldEvent, ScaffoldReport};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Scripts advertised in the summary, with what they do.
const SUMMARY_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "Starts the development server."),
    ("build", "Builds the app for production."),
    ("start", "Runs the built app in production mode."),
];

/// Manages CLI output based on configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Warning indicator: `⚠ <msg>`.  Not suppressed in quiet mode.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Print the success summary for a finished project.
    ///
    /// `cwd` decides the suggested `cd` target: the bare name when the
    /// project sits directly under it, the full path otherwise.
    pub fn summary(&self, report: &ScaffoldReport, cwd: &Path) -> io::Result<()> {
        for line in self.summary_lines(report, cwd) {
            self.print(&line)?;
        }
        Ok(())
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    fn green(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.green().to_string()
        }
    }

    fn cyan(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.cyan().to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.bold().to_string()
        }
    }

    fn event_lines(&self, event: &ScaffoldEvent) -> Vec<String> {
        match event {
            ScaffoldEvent::Creating {
                root,
                package_manager,
            } => vec![
                format!(
                    "Creating a new Next.js app in {}.",
                    self.green(&root.display().to_string())
                ),
                String::new(),
                self.bold(&format!("Using {package_manager}.")),
            ],
            ScaffoldEvent::Offline => vec![
                "You appear to be offline.".into(),
                "Falling back to the local Yarn cache.".into(),
            ],
            ScaffoldEvent::Installing { group, packages } => {
                let mut lines = vec![String::new(), format!("Installing {group}:")];
                lines.extend(packages.iter().map(|p| format!("- {}", self.cyan(p))));
                lines.push(String::new());
                lines
            }
            ScaffoldEvent::InstallSkipped => vec![
                String::new(),
                "Skipping dependency installation.".into(),
            ],
            ScaffoldEvent::TemplateMaterialized { .. } => vec![String::new()],
            ScaffoldEvent::RepositoryInitialized => {
                vec!["Initialized a git repository.".into(), String::new()]
            }
        }
    }

    fn summary_lines(&self, report: &ScaffoldReport, cwd: &Path) -> Vec<String> {
        let cd_path = if report.root.parent() == Some(cwd) {
            report.name.to_string()
        } else {
            report.root.display().to_string()
        };
        let run = |script: &str| report.package_manager.run_command(script);

        let mut lines = vec![
            format!(
                "{} Created {} at {}",
                self.green("Success!"),
                report.name,
                report.root.display()
            ),
            "Inside that directory, you can run several commands:".into(),
            String::new(),
        ];
        for &(script, description) in SUMMARY_SCRIPTS {
            lines.push(self.cyan(&format!("  {}", run(script))));
            lines.push(format!("    {description}"));
            lines.push(String::new());
        }
        lines.extend([
            "We suggest that you begin by typing:".into(),
            String::new(),
            format!("{} {cd_path}", self.cyan("  cd")),
            format!("  {}", self.cyan(&run("dev"))),
            String::new(),
        ]);
        lines
    }
}

impl ProgressSink for OutputManager {
    fn emit(&self, event: ScaffoldEvent) {
        for line in self.event_lines(&event) {
            if let Err(e) = self.print(&line) {
                debug!(error = %e, "Could not write progress output");
                return;
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use sprout_core::prelude::{DependencyGroup, PackageManager, ProjectName};

    use super::*;

    fn plain() -> OutputManager {
        let args = GlobalArgs {
            no_color: true,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn report(root: &str, package_manager: PackageManager) -> ScaffoldReport {
        let root = PathBuf::from(root);
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| ProjectName::parse(n).unwrap())
            .unwrap();
        ScaffoldReport {
            root,
            name,
            package_manager,
            files_written: 13,
            git_initialized: true,
        }
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert!(out.no_color);
    }

    #[test]
    fn installing_lists_each_package() {
        let lines = plain().event_lines(&ScaffoldEvent::Installing {
            group: DependencyGroup::Dev,
            packages: vec!["eslint".into(), "typescript".into()],
        });
        assert_eq!(
            lines,
            vec!["", "Installing devDependencies:", "- eslint", "- typescript", ""]
        );
    }

    #[test]
    fn creating_names_root_and_package_manager() {
        let lines = plain().event_lines(&ScaffoldEvent::Creating {
            root: PathBuf::from("/work/my-app"),
            package_manager: PackageManager::Yarn,
        });
        assert_eq!(lines[0], "Creating a new Next.js app in /work/my-app.");
        assert_eq!(lines[2], "Using yarn.");
    }

    #[test]
    fn summary_uses_bare_name_under_cwd() {
        let lines = plain().summary_lines(
            &report("/work/my-app", PackageManager::Npm),
            Path::new("/work"),
        );

        assert_eq!(lines[0], "Success! Created my-app at /work/my-app");
        assert!(lines.contains(&"  npm run dev".to_string()));
        assert!(lines.contains(&"  npm run build".to_string()));
        assert!(lines.contains(&"  npm start".to_string()));
        assert!(lines.contains(&"  cd my-app".to_string()));
    }

    #[test]
    fn summary_uses_full_path_elsewhere() {
        let lines = plain().summary_lines(
            &report("/srv/sites/blog", PackageManager::Yarn),
            Path::new("/work"),
        );

        assert!(lines.contains(&"  cd /srv/sites/blog".to_string()));
        assert!(lines.contains(&"  yarn dev".to_string()));
        assert!(lines.contains(&"  yarn build".to_string()));
        assert!(!lines.iter().any(|l| l.contains("yarn run")));
    }

    #[test]
    fn quiet_suppresses_progress() {
        let args = GlobalArgs {
            quiet: true,
            no_color: true,
            ..GlobalArgs::default()
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.print("hello").is_ok());
        out.emit(ScaffoldEvent::RepositoryInitialized);
    }
}
