//! Email delivery infrastructure

pub mod smtp;

pub use smtp::SmtpMailer;
