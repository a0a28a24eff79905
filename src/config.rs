//! Configuration management for the `tempcast` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. Everything has a
//! working default so the service runs with zero configuration.

use crate::TempcastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `tempcast` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempcastConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Model artifact configuration
    pub model: ModelConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the web server binds to
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Model artifact settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized model artifact
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,
    /// Optional URL to fetch the artifact from when the local file is absent
    pub remote_url: Option<String>,
    /// Fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u32,
    /// Maximum number of retries for a failed fetch
    #[serde(default = "default_fetch_max_retries")]
    pub fetch_max_retries: u32,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_port() -> u16 {
    8080
}

fn default_artifact_path() -> String {
    "temperature_predictor.bin".to_string()
}

fn default_fetch_timeout() -> u32 {
    30
}

fn default_fetch_max_retries() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for TempcastConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_server_port(),
            },
            model: ModelConfig {
                artifact_path: default_artifact_path(),
                remote_url: None,
                fetch_timeout_seconds: default_fetch_timeout(),
                fetch_max_retries: default_fetch_max_retries(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl TempcastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TEMPCAST_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TEMPCAST")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TempcastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tempcast").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.model.artifact_path.is_empty() {
            self.model.artifact_path = default_artifact_path();
        }
        if self.model.fetch_timeout_seconds == 0 {
            self.model.fetch_timeout_seconds = default_fetch_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.model.fetch_timeout_seconds > 300 {
            return Err(
                TempcastError::config("Artifact fetch timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.model.fetch_max_retries > 10 {
            return Err(TempcastError::config("Artifact fetch retries cannot exceed 10").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TempcastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TempcastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if let Some(url) = &self.model.remote_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TempcastError::config(
                    "Model remote URL must be a valid HTTP or HTTPS URL",
                )
                .into());
            }
        }

        Ok(())
    }
}
