//! # Configuration
//!
//! Application configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `ARKA_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ARKA_CONFIG_FILE` | Path of the TOML config file | `config.toml` |
//! | `ARKA_LOG_LEVEL` | Log level | `info` |
//! | `ARKA_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `ARKA_SERVICE_NAME` | Service name in logs | `arka` |
//! | `ARKA_ENVIRONMENT` | Deployment environment | `development` |
//!
//! # Examples
//!
//! ```no_run
//! use arka::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("log level: {}", config.log.level);
//! # Ok::<(), arka::config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::InvalidValue {
                field: "log.format".to_string(),
                message: format!("invalid log format '{value}', must be one of: json, pretty"),
            }),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include target (module path) in logs.
    #[serde(default = "default_true")]
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
            include_target: true,
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Environment (development, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            service_name: default_service_name(),
            environment: default_environment(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed,
    /// or if an environment override holds an unknown value.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("ARKA_CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies `ARKA_*` overrides read through `lookup`.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(level) = lookup("ARKA_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = lookup("ARKA_LOG_FORMAT") {
            self.log.format = format.parse()?;
        }
        if let Some(name) = lookup("ARKA_SERVICE_NAME") {
            self.service_name = name;
        }
        if let Some(env) = lookup("ARKA_ENVIRONMENT") {
            self.environment = env;
        }
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, VALID_LOG_LEVELS
                ),
            });
        }

        if self.service_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "service_name".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "arka".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.service_name, "arka");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn app_config_validate_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn app_config_validate_invalid_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log.level"));
    }

    #[test]
    fn app_config_validate_blank_service_name() {
        let config = AppConfig {
            service_name: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            environment = "production"

            [log]
            format = "pretty"
            "#,
        )
        .unwrap();
        assert_eq!(config.environment, "production");
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.log.level, "info");
        assert!(config.log.include_target);
        assert_eq!(config.service_name, "arka");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = AppConfig::from_toml("log = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = AppConfig::from_file("/nonexistent/arka.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }

    #[test]
    fn overrides_replace_values() {
        let env: HashMap<&str, &str> = [
            ("ARKA_LOG_LEVEL", "debug"),
            ("ARKA_LOG_FORMAT", "PRETTY"),
            ("ARKA_SERVICE_NAME", "arka-test"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(ToString::to_string))
            .unwrap();

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.service_name, "arka-test");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn unknown_format_override_is_rejected() {
        let mut config = AppConfig::default();
        config.log.format = LogFormat::Pretty;

        let err = config
            .apply_overrides(|key| (key == "ARKA_LOG_FORMAT").then(|| "xml".to_string()))
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "log.format"
        ));
        assert!(err.to_string().contains("'xml'"));
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }
}
