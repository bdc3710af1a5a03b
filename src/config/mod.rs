//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::fetch::FetcherConfig;
use crate::sources::ddragon::DDRAGON_BASE;
use crate::sources::ugg::UGG_BASE;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// HTTP fetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Upstream endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Data Dragon base URL
    #[serde(default = "default_ddragon_url")]
    pub ddragon_url: String,

    /// Statistics site base URL
    #[serde(default = "default_ugg_url")]
    pub ugg_url: String,
}

fn default_ddragon_url() -> String {
    DDRAGON_BASE.to_string()
}

fn default_ugg_url() -> String {
    UGG_BASE.to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            ddragon_url: default_ddragon_url(),
            ugg_url: default_ugg_url(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the snapshot file is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub sources: SourcesConfig,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./public/champions.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            log_level: default_log_level(),
            fetch: FetchConfig::default(),
            sources: SourcesConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Fetch timeout must be greater than 0".to_string(),
            ));
        }

        if self.sources.ddragon_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "Data Dragon base URL must not be empty".to_string(),
            ));
        }

        if self.sources.ugg_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "Statistics site base URL must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Fetcher configuration derived from the fetch section.
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            timeout: Duration::from_secs(self.fetch.timeout_seconds),
            user_agent: self.fetch.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.output_path, PathBuf::from("./public/champions.json"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.fetch.timeout_seconds, 30);
        assert_eq!(config.sources.ddragon_url, DDRAGON_BASE);
        assert_eq!(config.sources.ugg_url, UGG_BASE);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_timeout() {
        let mut config = AppConfig::default();
        config.fetch.timeout_seconds = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_url() {
        let mut config = AppConfig::default();
        config.sources.ugg_url = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.output_path, parsed.output_path);
        assert_eq!(config.sources.ugg_url, parsed.sources.ugg_url);
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        std::fs::write(
            &path,
            r#"
            output_path = "/tmp/out.json"

            [fetch]
            timeout_seconds = 10
            "#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.fetch.timeout_seconds, 10);
        // Unspecified sections fall back to defaults
        assert!(config.fetch.user_agent.contains("Mozilla"));
        assert_eq!(config.sources.ddragon_url, DDRAGON_BASE);
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");

        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_fetcher_config_conversion() {
        let mut config = AppConfig::default();
        config.fetch.timeout_seconds = 12;

        let fetcher = config.fetcher_config();
        assert_eq!(fetcher.timeout, Duration::from_secs(12));
        assert_eq!(fetcher.user_agent, config.fetch.user_agent);
    }
}
