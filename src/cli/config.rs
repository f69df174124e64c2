//! CLI configuration
//!
//! ```json
//! { "metadata_file": "/var/lib/aerodb/metadata.json", "log_level": "warn", "pretty_output": true }
//! ```
//!
//! Only `metadata_file` is required.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Metadata file holding the index records (required)
    pub metadata_file: String,

    /// Minimum log severity: trace, info, warn or error (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print JSON responses (default false)
    #[serde(default)]
    pub pretty_output: bool,
}

impl Config {
    /// Load configuration from file and apply its log level
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Logger::set_min_severity(config.min_severity()?);

        let display = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", display.as_str())]);

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.metadata_file.trim().is_empty() {
            return Err(CliError::config_error("metadata_file must not be empty"));
        }

        let severity = self.min_severity()?;
        if severity == Severity::Fatal {
            return Err(CliError::config_error(
                "Invalid log_level: 'fatal'. Must be one of trace, info, warn, error.",
            ));
        }

        Ok(())
    }

    /// Parsed log level
    pub fn min_severity(&self) -> CliResult<Severity> {
        self.log_level.parse::<Severity>().map_err(|_| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error.",
                self.log_level
            ))
        })
    }

    /// Metadata file as Path
    pub fn metadata_path(&self) -> &Path {
        Path::new(&self.metadata_file)
    }
}
