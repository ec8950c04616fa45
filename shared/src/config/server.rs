//! HTTP server configuration module

use serde::{Deserialize, Serialize};

use super::{optional, parse_var, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Public origin of this server, used to build verification links
    /// and as the cookie domain
    pub server_origin: String,

    /// Origin of the browser front-end, allowed through CORS
    pub client_origin: String,

    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
            server_origin: String::from("http://localhost:8000"),
            client_origin: String::from("http://localhost:3000"),
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_var("SERVER_PORT", optional("SERVER_PORT", "8000"))?;
        Ok(Self {
            host: optional("SERVER_HOST", "0.0.0.0"),
            port,
            server_origin: optional("SERVER_ORIGIN", "http://localhost:8000"),
            client_origin: optional("CLIENT_ORIGIN", "http://localhost:3000"),
            cookie_secure: optional("COOKIE_SECURE", "false") == "true",
        })
    }

    /// Socket address string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert!(!config.cookie_secure);
    }

    #[test]
    fn test_server_config_from_env_defaults() {
        temp_env::with_vars_unset(
            ["SERVER_HOST", "SERVER_PORT", "SERVER_ORIGIN", "CLIENT_ORIGIN"],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.port, 8000);
                assert_eq!(config.client_origin, "http://localhost:3000");
            },
        );
    }

    #[test]
    fn test_server_config_rejects_bad_port() {
        temp_env::with_var("SERVER_PORT", Some("not-a-port"), || {
            assert!(ServerConfig::from_env().is_err());
        });
    }
}
