//! JWT issuing and verification for session tokens.

pub mod config;
pub mod keys;
pub mod service;

pub use config::TokenCodecConfig;
pub use keys::KeyPair;
pub use service::TokenCodec;
