//! Runtime configuration for the `hfpef` binary.
//!
//! Sources, lowest precedence first: `hfpef.toml` (or the file named by
//! `--config` / `HFPEF_CONFIG`), then `HFPEF_*` environment variables, then
//! command-line flags (applied by the caller).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "hfpef.toml";
pub const CONFIG_ENV: &str = "HFPEF_CONFIG";
pub const FORMAT_ENV: &str = "HFPEF_FORMAT";
pub const STRICT_ENV: &str = "HFPEF_STRICT";
pub const LOG_ENV: &str = "HFPEF_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format '{0}' (expected text or json)")]
pub struct ParseOutputModeError(pub String);

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(ParseOutputModeError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Text => "text",
            OutputMode::Json => "json",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Report format when `--format` is not given.
    pub format: OutputMode,
    /// Reject unparseable values and unknown fields instead of skipping them.
    pub strict: bool,
    /// `env_logger` filter used when neither `-v` nor `RUST_LOG` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The config file [`Config::load`] reads: `explicit`, else
    /// `HFPEF_CONFIG`, else `hfpef.toml` in the working directory if present.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        default.is_file().then(|| default.to_path_buf())
    }

    /// Reads the config file. An explicitly named file must exist; the
    /// default `hfpef.toml` in the working directory is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::locate(explicit) {
            Some(path) => Self::read(&path),
            None => Ok(Self::default()),
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Applies `HFPEF_FORMAT`, `HFPEF_STRICT` and `HFPEF_LOG` through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(FORMAT_ENV) {
            self.format = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: FORMAT_ENV,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(STRICT_ENV) {
            self.strict = hfpef_type::parse_flag(STRICT_ENV, &value).map_err(|_| {
                ConfigError::InvalidEnv {
                    var: STRICT_ENV,
                    value: value.clone(),
                }
            })?;
        }
        if let Some(value) = lookup(LOG_ENV) {
            self.log_level = Some(value);
        }
        Ok(())
    }

    /// File first, then the process environment.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::load(explicit)?;
        config.apply_env_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }
}
