//! Token signing and session lifetime configuration

use serde::{Deserialize, Serialize};

use super::{optional, parse_var, required, ConfigError};

/// Configuration for access/refresh token issuance.
///
/// Access and refresh tokens are signed with independent RSA key
/// pairs. Keys arrive as base64-encoded PEM strings in the
/// environment; decoding them into usable signing keys happens in the
/// token codec so a bad key fails the process at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Base64-encoded PEM private key for access tokens
    pub access_private_key: String,

    /// Base64-encoded PEM public key for access tokens
    pub access_public_key: String,

    /// Base64-encoded PEM private key for refresh tokens
    pub refresh_private_key: String,

    /// Base64-encoded PEM public key for refresh tokens
    pub refresh_public_key: String,

    /// Access token lifetime in minutes
    pub access_ttl_minutes: i64,

    /// Refresh token lifetime in minutes
    pub refresh_ttl_minutes: i64,

    /// Access cookie max-age in minutes (converted to seconds at the
    /// session boundary)
    pub access_max_age_minutes: i64,

    /// Refresh cookie max-age in minutes
    pub refresh_max_age_minutes: i64,
}

impl TokenConfig {
    /// Create from environment variables
    ///
    /// All four keys are required; lifetimes default to 15 minutes for
    /// access and 60 for refresh, matching the original deployment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            access_private_key: required("ACCESS_TOKEN_PRIVATE_KEY")?,
            access_public_key: required("ACCESS_TOKEN_PUBLIC_KEY")?,
            refresh_private_key: required("REFRESH_TOKEN_PRIVATE_KEY")?,
            refresh_public_key: required("REFRESH_TOKEN_PUBLIC_KEY")?,
            access_ttl_minutes: parse_var(
                "ACCESS_TOKEN_EXPIRED_IN",
                optional("ACCESS_TOKEN_EXPIRED_IN", "15"),
            )?,
            refresh_ttl_minutes: parse_var(
                "REFRESH_TOKEN_EXPIRED_IN",
                optional("REFRESH_TOKEN_EXPIRED_IN", "60"),
            )?,
            access_max_age_minutes: parse_var(
                "ACCESS_TOKEN_MAXAGE",
                optional("ACCESS_TOKEN_MAXAGE", "15"),
            )?,
            refresh_max_age_minutes: parse_var(
                "REFRESH_TOKEN_MAXAGE",
                optional("REFRESH_TOKEN_MAXAGE", "60"),
            )?,
        })
    }
}
