//! # OTTB API
//!
//! HTTP layer for the OTTB backend: actix-web handlers, middleware and
//! request/response DTOs on top of `ottb_core`.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
