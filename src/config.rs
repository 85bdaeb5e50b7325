//! Configuration management for the `TripCraft` service
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and validates all settings before the service starts. The
//! provider credential is resolved here, once, at startup; business logic
//! never reads the environment.

use crate::error::TripCraftError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripCraft` service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripCraftConfig {
    /// Completion provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Completion provider (Gemini) configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Gemini API key. Required; startup aborts without it.
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the generative language API
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    /// Model used for plan generation
    #[serde(default = "default_provider_model")]
    pub model: String,
    /// Request timeout in seconds; expiry surfaces as a provider timeout error
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the service listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_provider_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_provider_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_provider_timeout() -> u32 {
    30
}

fn default_server_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_provider_base_url(),
            model: default_provider_model(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl TripCraftConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

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

        // Environment variable overrides with TRIPCRAFT_ prefix, e.g.
        // TRIPCRAFT_PROVIDER__API_KEY, TRIPCRAFT_SERVER__PORT
        builder = builder.add_source(
            Environment::with_prefix("TRIPCRAFT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripCraftConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // GEMINI_API_KEY is the conventional credential variable for this
        // provider; honor it when the prefixed form is absent.
        if config.provider.api_key.is_empty()
            && let Ok(key) = std::env::var("GEMINI_API_KEY")
        {
            config.provider.api_key = key;
        }

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripcraft").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.provider.api_key.is_empty() {
            return Err(TripCraftError::config(
                "Missing Gemini API key. Set TRIPCRAFT_PROVIDER__API_KEY or GEMINI_API_KEY.",
            )
            .into());
        }

        if self.provider.timeout_seconds == 0 || self.provider.timeout_seconds > 300 {
            return Err(
                TripCraftError::config("Provider timeout must be between 1 and 300 seconds").into(),
            );
        }

        if !self.provider.base_url.starts_with("http://")
            && !self.provider.base_url.starts_with("https://")
        {
            return Err(TripCraftError::config(
                "Provider base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.provider.model.is_empty() {
            return Err(TripCraftError::config("Provider model cannot be empty").into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripCraftError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> TripCraftConfig {
        let mut config = TripCraftConfig::default();
        config.provider.api_key = "test_api_key_123".to_string();
        config
    }

    #[test]
    fn test_default_config() {
        let config = TripCraftConfig::default();
        assert_eq!(
            config.provider.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.provider.model, "gemini-1.5-flash");
        assert_eq!(config.provider.timeout_seconds, 30);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.level, "info");
        assert!(config.provider.api_key.is_empty());
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        let config = TripCraftConfig::default();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[test]
    fn test_config_with_api_key_validates() {
        assert!(config_with_key().validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = config_with_key();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = config_with_key();
        config.provider.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.provider.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("between 1 and 300")
        );
    }

    #[test]
    fn test_config_validation_base_url_scheme() {
        let mut config = config_with_key();
        config.provider.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripCraftConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripcraft"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
