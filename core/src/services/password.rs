//! Password hashing and verification built on bcrypt.

use crate::errors::{AuthError, DomainError};

/// Bcrypt cost factor. DEFAULT_COST (12) keeps hashing around 250ms,
/// slow enough to blunt offline guessing.
const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hashes and verifies account passwords
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password
    ///
    /// # Returns
    /// * `Ok(String)` - The bcrypt hash, safe to persist
    /// * `Err(DomainError::Auth(AuthError::HashingFailure))` - bcrypt failed
    pub fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, BCRYPT_COST).map_err(|_| AuthError::HashingFailure.into())
    }

    /// Verifies a plaintext password against a stored hash
    ///
    /// A malformed hash verifies as false rather than erroring, so the
    /// caller cannot distinguish a corrupt record from a wrong password.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
