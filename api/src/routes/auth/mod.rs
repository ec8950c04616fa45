//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Signup with email verification
//! - Email verification callback
//! - Sign-in with cookie session setup
//! - Access token refresh
//! - Logout

pub mod logout;
pub mod refresh;
pub mod signin;
pub mod signup;
pub mod verify_email;

use std::sync::Arc;

use ottb_core::repositories::UserRepository;
use ottb_core::services::auth::AuthService;
use ottb_core::services::mailer::Mailer;

use crate::session::SessionCookies;

/// Application state shared by every handler
pub struct AppState<U, M>
where
    U: UserRepository,
    M: Mailer,
{
    pub auth_service: Arc<AuthService<U, M>>,
    pub session: SessionCookies,
}
