//! Token codec configuration

/// Lifetimes for the two token kinds, in minutes
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// Access token time-to-live
    pub access_ttl_minutes: i64,
    /// Refresh token time-to-live
    pub refresh_ttl_minutes: i64,
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self {
            access_ttl_minutes: 15,
            refresh_ttl_minutes: 60,
        }
    }
}
