//! # OTTB Infrastructure
//!
//! Infrastructure layer for the OTTB backend: Postgres persistence and
//! SMTP email delivery behind the interfaces defined in `ottb_core`.

pub mod database;
pub mod email;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email transport error: {0}")]
    Email(String),
}

pub use database::connection::DatabasePool;
pub use database::postgres::PostgresUserRepository;
pub use email::smtp::SmtpMailer;
