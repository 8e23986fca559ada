//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Default value handling
//! - Configuration validation
//!
//! # Example
//!
//! ```
//! use dogshouse::config::Config;
//!
//! let config = Config {
//!     database_path: "./data/dogshouse.db".to_string(),
//!     bind_addr: "127.0.0.1:8080".to_string(),
//!     log_level: "info".to_string(),
//! };
//!
//! println!("Serving on {}", config.bind_addr);
//! ```

use std::net::SocketAddr;

use crate::error::ConfigError;

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./data/dogshouse.db";

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment
/// variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the `SQLite` database file.
    pub database_path: String,
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `./data/dogshouse.db`)
    /// - `BIND_ADDR`: Listen address (default: `127.0.0.1:8080`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `BIND_ADDR` is not a valid socket
    /// address or `DATABASE_PATH` is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let config = Self {
            database_path,
            bind_addr,
            log_level,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty database path or
    /// an unparseable bind address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_PATH".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("'{}' is not a socket address", self.bind_addr),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_config() -> Config {
        Config {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    #[test]
    fn test_validate_defaults() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_database_path() {
        let config = Config {
            database_path: String::new(),
            ..test_config()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "DATABASE_PATH".to_string(),
                reason: "must not be empty".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_bad_bind_addr() {
        let config = Config {
            bind_addr: "not-an-address".to_string(),
            ..test_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "BIND_ADDR"));
    }

    #[test]
    fn test_validate_ipv6_bind_addr() {
        let config = Config {
            bind_addr: "[::1]:9000".to_string(),
            ..test_config()
        };
        assert!(config.validate().is_ok());
    }
}
