//! Authentication service configuration

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Public origin of this server, used to build verification links
    /// (e.g. "http://localhost:8000")
    pub server_origin: String,
}
