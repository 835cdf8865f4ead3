//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPROUT_<SECTION>__<KEY>`, e.g.
//!    `SPROUT_DEFAULTS__PACKAGE_MANAGER=yarn`
//! 3. Config file: `--config <FILE>`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use sprout_core::domain::PackageManager;
use tracing::debug;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "SPROUT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Used unless `--use-yarn` is passed.
    pub package_manager: PackageManager,
    /// Initial text offered by the project name prompt.
    pub project_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::Npm,
            project_name: "my-app".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  The
    /// default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Like [`Self::load`], with an explicit environment map instead of the
    /// process environment when `env` is `Some`.
    pub fn load_with_env(
        config_file: Option<&PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };

        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let settings = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .map_err(config_error)?;

        let config: Self = settings.try_deserialize().map_err(config_error)?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sprout.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sprout", "sprout")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| Path::new(".sprout.toml").to_path_buf())
    }
}

fn config_error(err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_use_npm_and_my_app() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.package_manager, PackageManager::Npm);
        assert_eq!(cfg.defaults.project_name, "my-app");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = toml_file(
            "[defaults]\npackage_manager = \"yarn\"\n\n[output]\nno_color = true\n",
        );
        let path = file.path().to_path_buf();

        let cfg = AppConfig::load_with_env(Some(&path), env(&[])).unwrap();

        assert_eq!(cfg.defaults.package_manager, PackageManager::Yarn);
        assert_eq!(cfg.defaults.project_name, "my-app");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[defaults]\nproject_name = \"from-file\"\n");
        let path = file.path().to_path_buf();

        let cfg = AppConfig::load_with_env(
            Some(&path),
            env(&[("SPROUT_DEFAULTS__PROJECT_NAME", "from-env")]),
        )
        .unwrap();

        assert_eq!(cfg.defaults.project_name, "from-env");
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let path = PathBuf::from("/definitely/not/here/sprout.toml");
        let err = AppConfig::load_with_env(Some(&path), env(&[])).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn unknown_package_manager_is_a_config_error() {
        let file = toml_file("[defaults]\npackage_manager = \"pnpm\"\n");
        let path = file.path().to_path_buf();

        let err = AppConfig::load_with_env(Some(&path), env(&[])).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn config_path_names_a_toml_file() {
        let path = AppConfig::config_path();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("toml"));
    }
}
