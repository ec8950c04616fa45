//! Outgoing mail (SMTP) configuration

use serde::{Deserialize, Serialize};

use super::{optional, parse_var, required, ConfigError};

/// SMTP relay settings for the verification mailer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,

    /// SMTP relay port
    pub port: u16,

    /// Relay username
    pub user: String,

    /// Relay password
    pub pass: String,

    /// From address for outgoing mail
    pub from: String,

    /// Upper bound on a single send, in seconds. A slow relay must not
    /// hold a signup request indefinitely.
    pub send_timeout: u64,
}

impl SmtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: required("SMTP_HOST")?,
            port: parse_var("SMTP_PORT", optional("SMTP_PORT", "587"))?,
            user: required("SMTP_USER")?,
            pass: required("SMTP_PASS")?,
            from: required("SMTP_FROM")?,
            send_timeout: parse_var("SMTP_SEND_TIMEOUT", optional("SMTP_SEND_TIMEOUT", "10"))?,
        })
    }
}
