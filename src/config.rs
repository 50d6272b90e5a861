//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lotree/lotree.toml`
//! 3. Environment variables: `LOTREE_*` prefix
//!
//! `demo_sequences` is file-only; there is no environment variable for it.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub show_tree: Option<bool>,
    pub color: Option<bool>,
    pub demo_sequences: Option<Vec<Vec<i64>>>,
}

/// Unified configuration for lotree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format for reports (default: text)
    pub format: OutputFormat,
    /// Draw the tree shape above text reports
    pub show_tree: bool,
    /// Colorize text output
    pub color: bool,
    /// Sequences inserted by the `demo` command
    pub demo_sequences: Vec<Vec<i64>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_tree: true,
            color: true,
            demo_sequences: crate::demo::demo_sequences(),
        }
    }
}

/// Get the XDG config directory for lotree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lotree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lotree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> TreeResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| TreeError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| TreeError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// The `LOTREE_*` environment source.
pub fn environment() -> Environment {
    Environment::with_prefix("LOTREE")
        .prefix_separator("_")
        .separator("__")
}

impl Settings {
    /// Load settings from the global config file and the process environment.
    pub fn load() -> TreeResult<Self> {
        Self::load_with(global_config_path().as_deref(), environment())
    }

    /// Load settings with layered precedence from explicit sources.
    ///
    /// A missing `global_path` file is not an error; an unreadable or
    /// malformed one is.
    #[instrument(level = "debug", skip(env))]
    pub fn load_with(global_path: Option<&Path>, env: Environment) -> TreeResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config replaces defaults field by field
        if let Some(path) = global_path {
            if path.exists() {
                debug!("loading global config from {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        Self::apply_env_overrides(current, env)
    }

    /// Overlay wins where it specifies a value, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            show_tree: overlay.show_tree.unwrap_or(self.show_tree),
            color: overlay.color.unwrap_or(self.color),
            demo_sequences: overlay
                .demo_sequences
                .clone()
                .unwrap_or_else(|| self.demo_sequences.clone()),
        }
    }

    fn apply_env_overrides(mut settings: Self, env: Environment) -> TreeResult<Self> {
        let config = Config::builder().add_source(env).build().map_err(config_err)?;

        if let Ok(val) = config.get_string("format") {
            settings.format =
                OutputFormat::from_str(&val, true).map_err(|reason| TreeError::Config {
                    message: format!("LOTREE_FORMAT: {reason}"),
                })?;
        }
        if let Ok(val) = config.get_bool("show_tree") {
            settings.show_tree = val;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# lotree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/lotree/lotree.toml
#   Env:    LOTREE_* environment variables (LOTREE_FORMAT, LOTREE_SHOW_TREE, LOTREE_COLOR)

# Report format: "text" or "toml"
# format = "text"

# Draw the tree shape above text reports
# show_tree = true

# Colorize text output (NO_COLOR is honored as well)
# color = true

# Sequences inserted by `lotree demo` (config file only, no LOTREE_* variable)
# demo_sequences = [[1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1, 0]]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}
