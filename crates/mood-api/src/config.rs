//! Configuration file parsing for the mood server.
//!
//! Loads settings from TOML files including bind address, allowed CORS
//! origins, an optional extra lexicon, and the log level. Every field has a
//! default, so an empty file is a valid configuration.

use axum::http::HeaderValue;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration field {field}: {reason}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Origins allowed to call the API from a browser
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Extra lexicon merged over the built-in one
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_bind_port() -> u16 {
    8000
}

/// The React dev server
fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            allowed_origins: default_allowed_origins(),
            lexicon_path: None,
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialization alone cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "bind_address",
                reason: "must not be empty".to_string(),
            });
        }

        self.origin_header_values()?;
        Ok(())
    }

    /// Allowed origins as header values
    ///
    /// The wildcard is rejected because credentials are allowed.
    pub fn origin_header_values(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                let invalid = |reason: &str| ConfigError::InvalidField {
                    field: "allowed_origins",
                    reason: format!("{:?} {}", origin, reason),
                };

                if origin == "*" {
                    return Err(invalid("is a wildcard; list origins explicitly"));
                }
                if origin.trim().is_empty() {
                    return Err(invalid("is empty"));
                }
                HeaderValue::from_str(origin).map_err(|_| invalid("is not a valid header value"))
            })
            .collect()
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
