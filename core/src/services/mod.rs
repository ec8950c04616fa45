//! Business services containing domain logic and use cases.

pub mod auth;
pub mod mailer;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use mailer::{Mailer, MockMailer, VerificationEmail};
pub use password::PasswordHasher;
pub use token::{KeyPair, TokenCodec, TokenCodecConfig};
