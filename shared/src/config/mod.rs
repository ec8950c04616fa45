//! Configuration module with business-specific sub-modules
//!
//! Every sub-configuration is a plain struct with a `from_env()`
//! constructor. Settings the process cannot run without (database URL,
//! token key material, SMTP credentials) produce a `ConfigError` when
//! absent; the binary treats that as fatal at startup. Everything else
//! carries a development default.

pub mod database;
pub mod server;
pub mod smtp;
pub mod token;

use thiserror::Error;

pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use smtp::SmtpConfig;
pub use token::TokenConfig;

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingVar { name: String },

    #[error("invalid value for {name}: {message}")]
    InvalidVar { name: String, message: String },
}

/// Read a required environment variable
pub(crate) fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar {
        name: name.to_string(),
    })
}

/// Read an optional environment variable with a fallback
pub(crate) fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse a numeric environment variable, failing loudly on garbage
pub(crate) fn parse_var<T: std::str::FromStr>(name: &str, raw: String) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::InvalidVar {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing/verification configuration
    pub token: TokenConfig,

    /// Outgoing mail configuration
    pub smtp: SmtpConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            token: TokenConfig::from_env()?,
            smtp: SmtpConfig::from_env()?,
        })
    }
}
