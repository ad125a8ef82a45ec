//! Configuration management for Craftui
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, HISTORY_LIMIT_MAX, HISTORY_LIMIT_MIN, SIMULATED_DELAY_MAX_MS, TICK_RATE_MAX_MS, TICK_RATE_MIN_MS,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub submission: SubmissionConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub theme: ThemeConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (drives the busy spinner)
    pub tick_rate_ms: u64,
}

/// Submission configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Latency of the simulated registration call in milliseconds
    pub simulated_delay_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of submissions shown in the history panel
    pub history_limit: usize,
    /// chrono format for submission timestamps
    pub timestamp_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Where the dark mode preference is stored. Defaults to the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 2000,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            history_limit: 5,
            timestamp_format: datetime::DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("craftui.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("craftui").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        if self.submission.simulated_delay_ms > SIMULATED_DELAY_MAX_MS {
            anyhow::bail!(
                "simulated_delay_ms cannot exceed {} ({} seconds)",
                SIMULATED_DELAY_MAX_MS,
                SIMULATED_DELAY_MAX_MS / 1000
            );
        }

        if self.display.history_limit < HISTORY_LIMIT_MIN || self.display.history_limit > HISTORY_LIMIT_MAX {
            anyhow::bail!(
                "history_limit must be between {} and {}, got {}",
                HISTORY_LIMIT_MIN,
                HISTORY_LIMIT_MAX,
                self.display.history_limit
            );
        }

        if let Err(e) = datetime::validate_format(&self.display.timestamp_format) {
            anyhow::bail!("Invalid timestamp_format: {}", e);
        }

        if let Some(path) = &self.theme.preference_file {
            if path.as_os_str().is_empty() {
                anyhow::bail!("preference_file cannot be empty");
            }
        }

        Ok(())
    }

    /// Path of the dark mode preference file
    pub fn preference_path(&self) -> Option<PathBuf> {
        self.theme
            .preference_file
            .clone()
            .or_else(|| Self::get_data_dir().ok().map(|dir| dir.join("preferences.json")))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Craftui Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("craftui"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }

    /// Get the data directory used for logs and the theme preference
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("craftui"))
    }
}
