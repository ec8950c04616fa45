//! Session token pair issued on sign-in.

use serde::{Deserialize, Serialize};

/// Signed access and refresh tokens for one session.
///
/// Both tokens are opaque to callers; only the token codec can mint or
/// verify them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    /// Short-lived token used to authenticate API requests
    pub access_token: String,

    /// Longer-lived token used only to mint new access tokens
    pub refresh_token: String,
}

impl SessionTokens {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
