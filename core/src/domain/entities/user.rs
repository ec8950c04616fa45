//! User entity representing a registered account in the OTTB system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user
    User,
    /// Administrator
    Admin,
}

impl Role {
    /// Database/string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// User entity representing a registered account
///
/// Username and email are stored lowercase; normalization happens in
/// the auth service before the entity is constructed. The `password`
/// field always holds a bcrypt hash, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Unique lowercase username
    pub username: String,

    /// Unique lowercase email address
    pub email: String,

    /// Bcrypt password hash
    pub password: String,

    /// Role of the account
    pub role: Role,

    /// Photo reference
    pub photo: String,

    /// Whether the email address has been verified
    pub verified: bool,

    /// Identity provider ("local" for password signups)
    pub provider: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new local, unverified account.
    ///
    /// Callers must pass username/email already lowercased and the
    /// password already hashed.
    pub fn new_local(
        name: String,
        username: String,
        email: String,
        password_hash: String,
        photo: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            username,
            email,
            password: password_hash,
            role: Role::User,
            photo,
            verified: false,
            provider: String::from("local"),
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account's email as verified
    pub fn mark_verified(&mut self) {
        self.verified = true;
        self.updated_at = Utc::now();
    }

    /// Public view of the account, with the password hash stripped
    pub fn filtered(&self) -> FilteredUser {
        FilteredUser {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            photo: self.photo.clone(),
            provider: self.provider.clone(),
            verified: self.verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The only user shape that crosses the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredUser {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub photo: String,
    pub provider: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new_local(
            "Ann".to_string(),
            "ann01".to_string(),
            "ann@x.com".to_string(),
            "$2b$12$hash".to_string(),
            "default.png".to_string(),
        )
    }

    #[test]
    fn test_new_local_user() {
        let user = sample_user();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.provider, "local");
        assert!(!user.verified);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_mark_verified() {
        let mut user = sample_user();
        user.mark_verified();
        assert!(user.verified);
        // Calling again keeps the flag set
        user.mark_verified();
        assert!(user.verified);
    }

    #[test]
    fn test_filtered_view_has_no_password() {
        let user = sample_user();
        let json = serde_json::to_value(user.filtered()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "ann01");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("owner".parse::<Role>().is_err());
    }
}
