//! Test doubles beyond the shared mocks

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{MockUserRepository, UserRepository};

/// Repository wrapper whose `delete` can be made to fail, for
/// exercising the signup rollback path
pub struct FlakyDeleteRepository {
    pub inner: MockUserRepository,
    fail_delete: AtomicBool,
}

impl FlakyDeleteRepository {
    pub fn new() -> Self {
        Self {
            inner: MockUserRepository::new(),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn fail_deletes(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for FlakyDeleteRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.inner.create(user).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_username(username).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.inner.update(user).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "connection reset".to_string(),
            });
        }
        self.inner.delete(id).await
    }
}
