//! Authentication service for handling account flows
//!
//! This service coordinates the authentication process including:
//! - Signup with email verification
//! - Email verification callbacks
//! - Credential sign-in and session token issuing
//! - Access token refresh

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::user::{FilteredUser, User};
use crate::domain::value_objects::SessionTokens;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::mailer::{Mailer, VerificationEmail};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenCodec;

use super::config::AuthServiceConfig;

/// Validated signup payload handed to the service.
///
/// Field-level validation (lengths, email shape, non-empty) happens at
/// the HTTP boundary; the service only enforces cross-field rules.
#[derive(Debug, Clone)]
pub struct SignUpData {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub photo: String,
}

/// Authentication service for managing the complete account lifecycle
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: Mailer,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Outbound email delivery
    mailer: Arc<M>,
    /// JWT codec for session tokens
    token_codec: Arc<TokenCodec>,
    /// Bcrypt password hashing
    password_hasher: PasswordHasher,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: Mailer,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        mailer: Arc<M>,
        token_codec: Arc<TokenCodec>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            mailer,
            token_codec,
            password_hasher: PasswordHasher::new(),
            config,
        }
    }

    /// Register a new local account
    ///
    /// This method:
    /// 1. Checks the password confirmation matches
    /// 2. Normalizes username and email to lowercase
    /// 3. Hashes the password and stores the unverified account
    /// 4. Sends the verification email, deleting the account again if
    ///    delivery fails
    ///
    /// # Returns
    ///
    /// * `Ok(FilteredUser)` - The created account, password stripped
    /// * `Err(DomainError::Auth(AuthError::PasswordMismatch))` - Confirmation differs
    /// * `Err(DomainError::Auth(AuthError::DuplicateUser))` - Username or email taken
    /// * `Err(DomainError::Auth(AuthError::EmailDeliveryFailed))` - Email could not be sent
    pub async fn sign_up(&self, data: SignUpData) -> DomainResult<FilteredUser> {
        if data.password != data.password_confirm {
            return Err(AuthError::PasswordMismatch.into());
        }

        let password_hash = self.password_hasher.hash(&data.password)?;

        let user = User::new_local(
            data.name,
            data.username.to_lowercase(),
            data.email.to_lowercase(),
            password_hash,
            data.photo,
        );

        let user = self.user_repository.create(user).await?;

        let email =
            VerificationEmail::for_signup(&user.email, &self.config.server_origin, user.id);

        if let Err(send_err) = self.mailer.send(&email).await {
            warn!(user_id = %user.id, error = %send_err, "verification email failed, rolling back signup");
            // Best-effort rollback. A leftover unverified row is
            // harmless, so a failed delete is only logged.
            if let Err(delete_err) = self.user_repository.delete(user.id).await {
                warn!(user_id = %user.id, error = %delete_err, "failed to delete user after email failure");
            }
            return Err(AuthError::EmailDeliveryFailed.into());
        }

        Ok(user.filtered())
    }

    /// Mark an account's email address as verified
    ///
    /// Verifying an already verified account succeeds again; the
    /// operation is idempotent.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Account is now verified
    /// * `Err(DomainError::Auth(AuthError::UserNotFound))` - Unknown account ID
    pub async fn verify_email(&self, user_id: Uuid) -> DomainResult<()> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.mark_verified();
        self.user_repository.update(user).await?;
        Ok(())
    }

    /// Authenticate with username and password
    ///
    /// Unknown username and wrong password both return
    /// `InvalidCredentials` so a caller cannot probe which usernames
    /// exist.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionTokens)` - Fresh access and refresh tokens
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Bad username or password
    pub async fn sign_in(&self, username: &str, password: &str) -> DomainResult<SessionTokens> {
        let user = self
            .user_repository
            .find_by_username(&username.to_lowercase())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_codec.issue_access(user.id)?;
        let refresh_token = self.token_codec.issue_refresh(user.id)?;

        Ok(SessionTokens::new(access_token, refresh_token))
    }

    /// Mint a new access token from a refresh token
    ///
    /// Every failure mode collapses to `RefreshForbidden`: an expired,
    /// malformed or wrong-kind token and a deleted account all look the
    /// same to the caller. The refresh token itself is not rotated.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A fresh access token
    /// * `Err(DomainError::Auth(AuthError::RefreshForbidden))` - Refresh rejected
    pub async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<String> {
        let claims = self
            .token_codec
            .verify_refresh(refresh_token)
            .map_err(|_| AuthError::RefreshForbidden)?;

        let user_id = claims.user_id().map_err(|_| AuthError::RefreshForbidden)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|_| DomainError::from(AuthError::RefreshForbidden))?
            .ok_or(AuthError::RefreshForbidden)?;

        Ok(self.token_codec.issue_access(user.id)?)
    }

    /// Look up the account behind a verified access token's claims
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<FilteredUser> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(user.filtered())
    }
}
