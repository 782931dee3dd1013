//! Configuration for the inspector binary.
//!
//! TOML configuration files with defaults for every field; command-line
//! flags override file values.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::error;

use crate::options::{ParseOptions, PathPolicy};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Parse behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    #[serde(default)]
    pub disable_dash: bool,
    #[serde(default)]
    pub disable_slash: bool,
    #[serde(default = "default_allow_special")]
    pub allow_special: bool,
    #[serde(default)]
    pub strip_program: bool,
    #[serde(default)]
    pub path_args: Vec<String>,
    #[serde(default)]
    pub path_anywhere: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub raw: bool,
    #[serde(default)]
    pub no_color: bool,
}

fn default_allow_special() -> bool {
    true
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            disable_dash: false,
            disable_slash: false,
            allow_special: default_allow_special(),
            strip_program: false,
            path_args: Vec::new(),
            path_anywhere: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from the default location, falling back to built-in defaults
    /// when no file exists or it cannot be read.
    pub fn load_default() -> Self {
        let Some(path) = default_path() else {
            return Config::default();
        };
        if !path.is_file() {
            return Config::default();
        }
        Config::from_file(&path).unwrap_or_else(|e| {
            error!("failed to load {}: {}", path.display(), e);
            Config::default()
        })
    }

    /// Parse-time options described by this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            disable_dash: self.parse.disable_dash,
            disable_slash: self.parse.disable_slash,
            allow_special_instructions: self.parse.allow_special,
            strip_program: self.parse.strip_program,
            path_args: self.parse.path_args.clone(),
            path_policy: if self.parse.path_anywhere {
                PathPolicy::AnywhereInSequence
            } else {
                PathPolicy::MustBeFinal
            },
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("argline").join("config.toml"))
}

/// Configuration error types
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
