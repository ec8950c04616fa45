//! Domain entities

pub mod token;
pub mod user;

pub use token::TokenClaims;
pub use user::{FilteredUser, Role, User};
