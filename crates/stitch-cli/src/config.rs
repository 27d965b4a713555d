//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STITCH__GENERATOR__ROOT`, `STITCH__OUTPUT__NO_COLOR`, ...
//! 3. Config file: `--config FILE`, or `config.toml` in the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generator settings.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Application root; the current directory when unset.
    pub root: Option<PathBuf>,
    /// Template directory replacing the built-in templates.
    pub templates_dir: Option<PathBuf>,
    /// Where versioned schema files go, relative to the root.
    pub migrations_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig {
                root: None,
                templates_dir: None,
                migrations_dir: "migrations".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&AppConfig::default())
            .context("Failed to serialise default configuration")?;

        let file = match config_file {
            Some(path) => {
                anyhow::ensure!(
                    path.is_file(),
                    "configuration file not found: {}",
                    path.display()
                );
                File::from(path.as_path()).required(true)
            }
            None => File::from(Self::config_path().as_path()).required(false),
        };

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix("STITCH")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stitch.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stitch", "stitch")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stitch.toml"))
    }

    /// The configured application root, or `fallback`.
    pub fn root_or(&self, fallback: &Path) -> PathBuf {
        self.generator
            .root
            .clone()
            .unwrap_or_else(|| fallback.to_path_buf())
    }
}
