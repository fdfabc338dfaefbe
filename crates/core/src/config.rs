//! Configuration file parsing for .trackport.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`TrackportConfig::find_and_load`]
pub const CONFIG_FILE_NAME: &str = ".trackport.toml";

/// Main configuration structure for .trackport.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackportConfig {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Options read once per report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// File pathname prefix stripped from event paths
    #[serde(
        default,
        alias = "strip-path",
        alias = "stripPathPrefix"
    )]
    pub strip_path_prefix: String,

    /// Format version written into the report header verbatim
    #[serde(
        default = "default_format_version",
        alias = "version",
        alias = "formatVersion"
    )]
    pub format_version: String,

    /// Format name written into the report header verbatim
    #[serde(
        default = "default_format_name",
        alias = "format",
        alias = "formatName"
    )]
    pub format_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default renderer name ("coverity" or "polaris")
    #[serde(default = "default_output_format")]
    pub format: String,
}

fn default_format_version() -> String {
    "1".to_string()
}

fn default_format_name() -> String {
    "cov-import-results input".to_string()
}

fn default_output_format() -> String {
    "coverity".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            strip_path_prefix: String::new(),
            format_version: default_format_version(),
            format_name: default_format_name(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

impl ReportConfig {
    pub fn with_strip_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_path_prefix = prefix.into();
        self
    }
}

impl TrackportConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: TrackportConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .trackport.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading configuration");
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
