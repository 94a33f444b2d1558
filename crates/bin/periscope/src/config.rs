//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `periscope.toml` in the working directory unless an explicit
//! path is given. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote node settings.
    pub backend: BackendConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Visual detection output settings.
    pub detection: DetectionConfig,
}

/// Remote node connection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the remote node (e.g. `http://192.168.1.20:5000`).
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Visual detection output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Where the processed image is written.
    pub output: PathBuf,
}

impl Config {
    /// Load configuration from `path` (or `periscope.toml` when absent)
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error when an explicitly given file cannot be read,
    /// when the TOML is malformed, or when validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, true)?,
            None => Self::from_file(Path::new("periscope.toml"), false)?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PERISCOPE_BACKEND_URL") {
            self.backend.base_url = val;
        }
        if let Ok(val) = std::env::var("PERISCOPE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.backend.base_url.starts_with("http://")
            && !self.backend.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "backend.base_url must be an http(s) URL, got {:?}",
                self.backend.base_url
            )));
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "periscope=info".to_string(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("processed.jpg"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.logging.filter, "periscope=info");
        assert_eq!(config.detection.output, PathBuf::from("processed.jpg"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [backend]
            base_url = 'http://10.0.0.7:5000'

            [logging]
            filter = 'debug'

            [detection]
            output = 'annotated.jpg'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "http://10.0.0.7:5000");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.detection.output, PathBuf::from("annotated.jpg"));
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'trace'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "trace");
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent.toml"), false).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn should_require_an_explicitly_given_file() {
        let result = Config::from_file(Path::new("nonexistent.toml"), true);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn should_reject_non_http_base_url() {
        let mut config = Config::default();
        config.backend.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_accept_https_base_url() {
        let mut config = Config::default();
        config.backend.base_url = "https://node.example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
