//! Logger configuration loading
//!
//! Lets host applications keep logger settings in a YAML file instead of
//! hard-coding them at the call site.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, LoggerResult};
use crate::logger::LoggerOptions;

/// Logger settings as stored on disk
///
/// All fields are optional; absent fields leave the logger's current
/// configuration untouched, mirroring [`LoggerOptions`].
///
/// # Example
///
/// ```yaml
/// path: logs/app.log
/// tee: true
/// suppress:
///   - debug
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoggerConfig {
    /// Log file path (absent: console only)
    #[serde(default)]
    pub path: Option<String>,

    /// Write to the console in addition to the log file
    #[serde(default)]
    pub tee: Option<bool>,

    /// Tag names whose output is discarded
    #[serde(default)]
    pub suppress: Option<Vec<String>>,
}

impl LoggerConfig {
    /// Load configuration from a YAML file
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| LoggerError::Parse(format!("Failed to parse YAML: {}", e)))
    }

    /// User-level config location: `<config_dir>/<app>/logger.yaml`
    pub fn user_path(app: &str) -> PathBuf {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join(app).join("logger.yaml")
    }

    /// The options part of this configuration
    pub fn options(&self) -> LoggerOptions {
        LoggerOptions {
            tee: self.tee,
            suppress: self.suppress.clone(),
        }
    }
}
