//! Configuration management for the Health Assessment backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HA__)

use anyhow::Result;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// External text generator configuration
///
/// Disabled by default; chat then answers from the local classifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub enabled: bool,
    pub api_url: String,
    pub model: String,
    /// Never serialized back out
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
    pub timeout_secs: u64,
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Enabled and holding a key
    pub fn is_usable(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            generator: GeneratorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HA__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (HA__ prefix)
            // e.g., HA__GENERATOR__API_KEY=... sets generator.api_key
            .add_source(
                config::Environment::with_prefix("HA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Problems that make this configuration unfit for production
    pub fn production_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.generator.enabled && self.generator.api_key.is_none() {
            errors.push("Generator is enabled but HA__GENERATOR__API_KEY is not set");
        }
        if self.generator.timeout_secs == 0 {
            errors.push("Generator timeout must be at least 1 second");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.generator.enabled);
        assert!(!config.generator.is_usable());
        assert_eq!(config.generator.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_enabled_generator_without_key_fails_production_check() {
        let mut config = AppConfig::default();
        assert!(config.production_errors().is_empty());

        config.generator.enabled = true;
        assert_eq!(config.production_errors().len(), 1);

        config.generator.api_key = Some(SecretString::new("test-key".to_string()));
        assert!(config.production_errors().is_empty());
        assert!(config.generator.is_usable());
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let mut config = AppConfig::default();
        config.generator.api_key = Some(SecretString::new("hidden".to_string()));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hidden"));
        assert!(!json.contains("api_key"));
    }
}
