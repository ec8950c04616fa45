//! Request and response DTOs

pub mod auth_dto;

pub use auth_dto::{user_envelope, SignInRequest, SignUpRequest, TokenResponse, UserEnvelope};
