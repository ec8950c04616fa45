//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Implementations live in the infrastructure layer; the core crate
//! only ships a mock for tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping
/// the abstraction boundary between domain and infrastructure layers.
/// Uniqueness of username and email is enforced here: `create` must
/// fail with `AuthError::DuplicateUser` when either collides.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(AuthError::DuplicateUser))` - Username or email taken
    /// * `Err(DomainError)` - Database error occurred
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their lowercase username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Update an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No user with that ID
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user by ID
    ///
    /// # Returns
    /// * `Ok(true)` - User existed and was removed
    /// * `Ok(false)` - No user with that ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
