//! Value objects

pub mod session;

pub use session::SessionTokens;
