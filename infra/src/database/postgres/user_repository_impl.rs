//! Postgres implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use ottb_core::domain::entities::user::{Role, User};
use ottb_core::errors::{AuthError, DomainError};
use ottb_core::repositories::UserRepository;

/// SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// Postgres implementation of UserRepository
pub struct PostgresUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new Postgres user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        let role_str: String = row
            .try_get("role")
            .map_err(|e| db_error("role", e))?;
        let role = role_str
            .parse::<Role>()
            .map_err(|e| DomainError::Database { message: e })?;

        Ok(User {
            id: row.try_get("id").map_err(|e| db_error("id", e))?,
            name: row.try_get("name").map_err(|e| db_error("name", e))?,
            username: row
                .try_get("username")
                .map_err(|e| db_error("username", e))?,
            email: row.try_get("email").map_err(|e| db_error("email", e))?,
            password: row
                .try_get("password")
                .map_err(|e| db_error("password", e))?,
            role,
            photo: row.try_get("photo").map_err(|e| db_error("photo", e))?,
            verified: row
                .try_get("verified")
                .map_err(|e| db_error("verified", e))?,
            provider: row
                .try_get("provider")
                .map_err(|e| db_error("provider", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("updated_at", e))?,
        })
    }
}

fn db_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    // Unique index collisions surface as a domain-level duplicate, the
    // rest stay opaque database errors
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return AuthError::DuplicateUser.into();
        }
    }
    DomainError::Database {
        message: format!("Database query failed: {}", e),
    }
}

const USER_COLUMNS: &str = "id, name, username, email, password, role, photo, verified, provider, created_at, updated_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            r#"
            INSERT INTO users ({USER_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query(&query)
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.role.as_str())
            .bind(&user.photo)
            .bind(user.verified)
            .bind(&user.provider)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        Self::row_to_user(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            LIMIT 1
            "#
        );

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE username = $1
            LIMIT 1
            "#
        );

        let result = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            r#"
            UPDATE users
            SET name = $2, username = $3, email = $4, password = $5,
                role = $6, photo = $7, verified = $8, provider = $9,
                updated_at = $10
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        let result = sqlx::query(&query)
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.role.as_str())
            .bind(&user.photo)
            .bind(user.verified)
            .bind(&user.provider)
            .bind(user.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Self::row_to_user(&row),
            None => Err(DomainError::NotFound {
                resource: "User".to_string(),
            }),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}
