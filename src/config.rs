//! Configuration management for the `TripKit` library
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. Configuration
//! chooses the data source implementation, the snapshot storage location
//! and the HTTP endpoints used by the real data source.

use crate::TripKitError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripKit` library
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TripKitConfig {
    /// Data source selection
    #[serde(default)]
    pub source: SourceConfig,
    /// HTTP API configuration, used by the HTTP data source
    #[serde(default)]
    pub api: ApiConfig,
    /// Snapshot storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Appearance preferences
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Which `DataSource` implementation to construct
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Static mock generators, no network access
    #[default]
    Mock,
    /// HTTP-backed data source
    Http,
}

/// Data source selection settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    /// Data source kind (mock or http)
    #[serde(default)]
    pub kind: SourceKind,
}

/// HTTP API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    /// Base URL for the travel API (trips and advisories)
    #[serde(default = "default_travel_base_url")]
    pub travel_base_url: String,
    /// Base URL for the events API
    #[serde(default = "default_events_base_url")]
    pub events_base_url: String,
    /// API key sent to the travel and events endpoints
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u32,
}

/// Snapshot storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot database
    #[serde(default = "default_storage_path")]
    pub path: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Appearance preferences
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppearanceConfig {
    /// Preferred color scheme ("dark" or "light"); when absent the host
    /// environment is probed instead
    pub color_scheme: Option<String>,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/3.0".to_string()
}

fn default_travel_base_url() -> String {
    "https://api.example.com/travel".to_string()
}

fn default_events_base_url() -> String {
    "https://api.example.com/events".to_string()
}

fn default_api_timeout() -> u32 {
    30
}

fn default_storage_path() -> String {
    "~/.local/share/tripkit/state".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            weather_base_url: default_weather_base_url(),
            travel_base_url: default_travel_base_url(),
            events_base_url: default_events_base_url(),
            api_key: None,
            timeout_seconds: default_api_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripKitConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with TRIPKIT_ prefix, e.g.
        // TRIPKIT_SOURCE__KIND=http
        builder = builder.add_source(
            Environment::with_prefix("TRIPKIT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripKitConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripkit").join("config.toml"))
    }

    /// Expand the configured storage path, resolving a leading `~`
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        if let Some(rest) = self.storage.path.strip_prefix("~/")
            && let Some(home) = dirs::home_dir()
        {
            return home.join(rest);
        }
        PathBuf::from(&self.storage.path)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 300 {
            return Err(
                TripKitError::config("API timeout must be between 1 and 300 seconds").into(),
            );
        }

        if self.storage.path.is_empty() {
            return Err(TripKitError::config("Storage path cannot be empty").into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripKitError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripKitError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for url in [
            &self.api.weather_base_url,
            &self.api.travel_base_url,
            &self.api.events_base_url,
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TripKitError::config(format!(
                    "API base URL '{url}' must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if let Some(scheme) = &self.appearance.color_scheme
            && !["dark", "light"].contains(&scheme.as_str())
        {
            return Err(TripKitError::config(format!(
                "Invalid color scheme '{scheme}'. Must be 'dark' or 'light'"
            ))
            .into());
        }

        Ok(())
    }
}
