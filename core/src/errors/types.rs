//! Domain-specific error types for authentication and token operations.

use thiserror::Error;

/// Authentication-related errors
///
/// These errors represent the authentication failure scenarios the
/// service layer can produce. The HTTP status and response body for
/// each variant are decided in the presentation layer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("User with that email or username already exists")]
    DuplicateUser,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("could not refresh access token")]
    RefreshForbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Failed to send email")]
    EmailDeliveryFailed,

    #[error("Password hashing failed")]
    HashingFailure,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token signing failed")]
    SigningFailed,

    #[error("Key loading failed: {message}")]
    KeyLoadError { message: String },
}
