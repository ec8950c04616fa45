//! Session cookie construction.
//!
//! Three cookies make up a browser session: `access_token` and
//! `refresh_token` are httpOnly, while `logged_in` is readable by
//! frontend JavaScript so it can tell whether a session exists without
//! touching the tokens.

use actix_web::cookie::time::Duration;
use actix_web::cookie::Cookie;

use ottb_shared::{ServerConfig, TokenConfig};

pub const ACCESS_COOKIE: &str = "access_token";
pub const REFRESH_COOKIE: &str = "refresh_token";
pub const LOGGED_IN_COOKIE: &str = "logged_in";

/// Builds the session cookies for sign-in, refresh and logout
#[derive(Debug, Clone)]
pub struct SessionCookies {
    /// Cookie domain, the server origin without scheme or port
    pub domain: String,
    /// Whether cookies require HTTPS
    pub secure: bool,
    /// Max-Age for the access and logged_in cookies, in seconds
    pub access_max_age_secs: i64,
    /// Max-Age for the refresh cookie, in seconds
    pub refresh_max_age_secs: i64,
}

impl SessionCookies {
    pub fn from_config(server: &ServerConfig, token: &TokenConfig) -> Self {
        Self {
            domain: cookie_domain(&server.server_origin),
            secure: server.cookie_secure,
            access_max_age_secs: token.access_max_age_minutes * 60,
            refresh_max_age_secs: token.refresh_max_age_minutes * 60,
        }
    }

    /// Cookies set after a successful sign-in
    pub fn signed_in(&self, access_token: &str, refresh_token: &str) -> [Cookie<'static>; 3] {
        [
            self.build(ACCESS_COOKIE, access_token, self.access_max_age_secs, true),
            self.build(
                REFRESH_COOKIE,
                refresh_token,
                self.refresh_max_age_secs,
                true,
            ),
            self.build(LOGGED_IN_COOKIE, "true", self.access_max_age_secs, false),
        ]
    }

    /// Cookies set after a successful token refresh. The refresh
    /// cookie is left untouched since the token is not rotated.
    pub fn refreshed(&self, access_token: &str) -> [Cookie<'static>; 2] {
        [
            self.build(ACCESS_COOKIE, access_token, self.access_max_age_secs, true),
            self.build(LOGGED_IN_COOKIE, "true", self.access_max_age_secs, false),
        ]
    }

    /// Expired cookies that clear the session on logout
    pub fn cleared(&self) -> [Cookie<'static>; 3] {
        [
            self.build(ACCESS_COOKIE, "", -1, true),
            self.build(REFRESH_COOKIE, "", -1, true),
            self.build(LOGGED_IN_COOKIE, "", -1, false),
        ]
    }

    fn build(
        &self,
        name: &'static str,
        value: &str,
        max_age_secs: i64,
        http_only: bool,
    ) -> Cookie<'static> {
        Cookie::build(name, value.to_owned())
            .path("/")
            .domain(self.domain.clone())
            .max_age(Duration::seconds(max_age_secs))
            .secure(self.secure)
            .http_only(http_only)
            .finish()
    }
}

/// Strips scheme, port and path from an origin URL, leaving the host
fn cookie_domain(origin: &str) -> String {
    let host = origin
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let host = host.split('/').next().unwrap_or(host);
    host.split(':').next().unwrap_or(host).to_string()
}
