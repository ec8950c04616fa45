//! # OTTB Shared
//!
//! Configuration and wire-format types shared by every layer of the
//! OTTB backend. This crate has no knowledge of HTTP, SQL, or SMTP; it
//! only describes settings and response envelopes.

pub mod config;
pub mod types;

pub use config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig, SmtpConfig, TokenConfig};
pub use types::response::{DataResponse, MessageResponse, Status};
