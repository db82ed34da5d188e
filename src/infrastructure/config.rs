//! Configuration management

use crate::domain::DocumentFormat;
use crate::error::{NameDropperError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Explicit config file location
pub const CONFIG_ENV: &str = "NAMEDROPPER_CONFIG";
/// Default document format, overriding the config file
pub const FORMAT_ENV: &str = "NAMEDROPPER_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default document format, validated on use
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load config from `$NAMEDROPPER_CONFIG` or `./.namedropper/config.toml`,
    /// then apply `$NAMEDROPPER_FORMAT`
    pub fn discover() -> Result<Self> {
        let path = match env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => env::current_dir()?.join(".namedropper").join("config.toml"),
        };

        let config = Self::load_from_path(&path)?;
        let format_override = env::var(FORMAT_ENV).ok().filter(|v| !v.trim().is_empty());
        Ok(config.with_format_override(format_override))
    }

    /// Load config from .namedropper/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        Self::load_from_path(&path.join(".namedropper").join("config.toml"))
    }

    /// Load config from a TOML file; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(NameDropperError::Io(e)),
        };

        tracing::debug!(path = %path.display(), "loaded config file");
        toml::from_str(&contents).map_err(|e| {
            NameDropperError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn with_format_override(mut self, format: Option<String>) -> Self {
        if format.is_some() {
            self.format = format;
        }
        self
    }

    /// The configured default format, if any
    pub fn document_format(&self) -> Result<Option<DocumentFormat>> {
        self.format
            .as_deref()
            .map(|s| DocumentFormat::from_str(s).map_err(NameDropperError::InvalidInput))
            .transpose()
    }
}
