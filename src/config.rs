//! Configuration management for the `WeatherFront` application
//!
//! Handles loading configuration from an optional file and environment
//! variables, and provides validation for all configuration settings.
//! The provider base URLs live here so that test doubles can be substituted
//! for the external collaborators.

use crate::WeatherFrontError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `WeatherFront` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherFrontConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// External provider configuration
    #[serde(default)]
    pub providers: ProviderConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the listener binds to (all interfaces)
    #[serde(default = "default_port")]
    pub port: u16,
}

/// External provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the geocoding provider
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL of the forecast provider
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Request timeout in seconds for outbound calls
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

// Default value functions
fn default_port() -> u16 {
    5000
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for WeatherFrontConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: ProviderConfig::default(),
        }
    }
}

impl WeatherFrontConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with WEATHERFRONT_ prefix
        builder = builder.add_source(
            Environment::with_prefix("WEATHERFRONT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WeatherFrontConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), WeatherFrontError> {
        if self.server.port == 0 {
            return Err(WeatherFrontError::config("server port must be non-zero"));
        }

        if self.providers.timeout_seconds == 0 {
            return Err(WeatherFrontError::config(
                "provider timeout must be non-zero",
            ));
        }

        for (name, url) in [
            ("geocoding_base_url", &self.providers.geocoding_base_url),
            ("forecast_base_url", &self.providers.forecast_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WeatherFrontError::config(format!(
                    "{name} must be an http(s) URL, got: {url}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WeatherFrontConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(
            config.providers.geocoding_base_url,
            "https://geocoding-api.open-meteo.com"
        );
        assert_eq!(
            config.providers.forecast_base_url,
            "https://api.open-meteo.com"
        );
        assert_eq!(config.providers.timeout_seconds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = WeatherFrontConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = WeatherFrontConfig::default();
        config.providers.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_urls() {
        let mut config = WeatherFrontConfig::default();
        config.providers.geocoding_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let config =
            WeatherFrontConfig::load_from_path(Some(PathBuf::from("does-not-exist.toml")))
                .expect("load should fall back to defaults");
        assert_eq!(config.server.port, 5000);
    }
}
