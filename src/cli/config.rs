//! Configuration management for recordkit
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.recordkit/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::errors::{RecordError, Result};

/// Complete configuration for recordkit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub air: AirConfig,
    #[serde(default)]
    pub hospital: HospitalConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Air-quality tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AirConfig {
    pub preview_count: usize,
    pub filter_limit: usize,
    /// Where rendered charts land; system temp dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_dir: Option<PathBuf>,
    pub open_chart: bool,
}

/// Hospital tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalConfig {
    pub records_file: PathBuf,
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
}

impl Default for AirConfig {
    fn default() -> Self {
        Self {
            preview_count: 5,
            filter_limit: 10,
            chart_dir: None,
            open_chart: true,
        }
    }
}

impl Default for HospitalConfig {
    fn default() -> Self {
        Self {
            records_file: PathBuf::from("hospital_records.json"),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color_output: true }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RecordError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| RecordError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config location, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".recordkit").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.air.preview_count == 0 {
            return Err(RecordError::Config(
                "preview_count must be greater than 0".to_string(),
            ));
        }

        if self.air.filter_limit == 0 {
            return Err(RecordError::Config(
                "filter_limit must be greater than 0".to_string(),
            ));
        }

        if self.hospital.records_file.as_os_str().is_empty() {
            return Err(RecordError::Config(
                "records_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file; the tools only ever read it
    #[cfg(test)]
    pub(crate) fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| RecordError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| RecordError::Config(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RecordError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Directory rendered charts are written into
    pub fn chart_dir(&self) -> PathBuf {
        self.air.chart_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
