//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap a new web app in one command",
    long_about = "Sprout creates a Next.js + Tailwind CSS + Recoil project in the \
                  given directory, installs its dependencies and initializes a git \
                  repository.",
    after_help = "EXAMPLES:\n\
        \x20 sprout my-app\n\
        \x20 sprout my-app --use-yarn\n\
        \x20 sprout ../sites/blog --skip-install",
)]
pub struct Cli {
    /// Directory to create the project in; its last component is the project name.
    #[arg(value_name = "PROJECT_DIRECTORY")]
    pub project_directory: Option<String>,

    /// Bootstrap the app using yarn instead of npm.
    #[arg(long = "use-yarn")]
    pub use_yarn: bool,

    /// Write the project files but skip installing dependencies.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Flags shared with logging and output.
    #[command(flatten)]
    pub global: GlobalArgs,
}
