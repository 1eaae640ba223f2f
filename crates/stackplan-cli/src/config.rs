//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `STACKPLAN_` prefix, `__` between sections
//!    (e.g. `STACKPLAN_PATHS__ASSETS_DIR=./tls`)
//! 3. Config file: `--config FILE` (must exist) or the platform default
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat, Source};
use serde::{Deserialize, Serialize};

use stackplan_core::application::StackTemplateOptions;

const ENV_PREFIX: &str = "STACKPLAN";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where render inputs live.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Default input locations for `stackplan render`, relative to the working
/// directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub assets_dir: PathBuf,
    pub controller_template: PathBuf,
    pub worker_template: PathBuf,
    pub stack_template: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                assets_dir: "credentials".into(),
                controller_template: "userdata/cloud-config-controller".into(),
                worker_template: "userdata/cloud-config-worker".into(),
                stack_template: "stack-template.json".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; when it is
    /// `None` the platform default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };
        Self::build(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn build<F>(file: F, env: Environment) -> anyhow::Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let paths = &defaults.paths;

        Config::builder()
            .set_default("paths.assets_dir", path_str(&paths.assets_dir))?
            .set_default("paths.controller_template", path_str(&paths.controller_template))?
            .set_default("paths.worker_template", path_str(&paths.worker_template))?
            .set_default("paths.stack_template", path_str(&paths.stack_template))?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format.as_str())?
            .add_source(file)
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stackplan.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stackplan", "stackplan")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stackplan.toml"))
    }

    /// Rendering inputs with the configured paths.
    pub fn template_options(&self) -> StackTemplateOptions {
        StackTemplateOptions {
            assets_dir: self.paths.assets_dir.clone(),
            controller_template: self.paths.controller_template.clone(),
            worker_template: self.paths.worker_template.clone(),
            stack_template: self.paths.stack_template.clone(),
            ami: None,
        }
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
