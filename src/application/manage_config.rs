//! Config inspection use case

use crate::error::{NameDropperError, Result};
use crate::infrastructure::Config;

/// Read-only view over the effective configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    pub fn new(config: Config) -> Self {
        ConfigService { config }
    }

    /// Get a single config value; unset keys print as an empty string
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "format" => Ok(self
                .config
                .document_format()?
                .map(|f| f.to_string().to_lowercase())
                .unwrap_or_default()),
            _ => Err(NameDropperError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: format",
                key
            ))),
        }
    }

    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![("format", self.get("format")?)])
    }
}
