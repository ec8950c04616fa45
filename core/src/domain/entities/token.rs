//! Token claims for JWT-based sessions.
//!
//! Access and refresh tokens carry structurally identical claims; the
//! two lifetimes are kept apart purely by signing with independent key
//! pairs, so a compromised access key cannot forge refresh tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (account ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl TokenClaims {
    /// Creates claims for a token expiring `ttl_minutes` from now
    pub fn new(user_id: Uuid, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims have expired. Expiry is strict: a
    /// token whose `exp` equals the current second is already dead.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
