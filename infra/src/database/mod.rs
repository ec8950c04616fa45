//! Database infrastructure

pub mod connection;
pub mod postgres;
