//! Mapping from domain errors to HTTP responses.
//!
//! Every handler funnels its error path through `handle_domain_error`
//! so status codes and body shapes stay consistent across routes.

use actix_web::HttpResponse;
use log::error;

use ottb_core::errors::{AuthError, DomainError, TokenError};
use ottb_shared::MessageResponse;

/// Converts a domain error into the matching HTTP response
pub fn handle_domain_error(err: DomainError) -> HttpResponse {
    match err {
        DomainError::Auth(auth_err) => handle_auth_error(auth_err),
        DomainError::Token(token_err) => handle_token_error(token_err),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(MessageResponse::fail(message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound()
            .json(MessageResponse::fail(format!("{} not found", resource))),
        DomainError::Database { message } => {
            error!("database error: {}", message);
            HttpResponse::BadGateway().json(MessageResponse::error("Something bad happened"))
        }
        DomainError::Internal { message } => {
            error!("internal error: {}", message);
            HttpResponse::InternalServerError()
                .json(MessageResponse::error("Something bad happened"))
        }
    }
}

fn handle_auth_error(err: AuthError) -> HttpResponse {
    match err {
        AuthError::PasswordMismatch => {
            HttpResponse::BadRequest().json(MessageResponse::fail("Passwords do not match"))
        }
        AuthError::DuplicateUser => HttpResponse::Conflict().json(MessageResponse::fail(
            "User with that email or username already exists",
        )),
        AuthError::InvalidCredentials => {
            HttpResponse::BadRequest().json(MessageResponse::fail("Invalid username or Password"))
        }
        AuthError::RefreshForbidden => {
            HttpResponse::Forbidden().json(MessageResponse::fail("could not refresh access token"))
        }
        AuthError::UserNotFound => {
            HttpResponse::BadRequest().json(MessageResponse::fail("Invalid user ID"))
        }
        AuthError::EmailDeliveryFailed => {
            HttpResponse::InternalServerError().json(MessageResponse::fail("Failed to send email."))
        }
        AuthError::HashingFailure => {
            HttpResponse::BadGateway().json(MessageResponse::error("Something bad happened"))
        }
    }
}

fn handle_token_error(err: TokenError) -> HttpResponse {
    match err {
        TokenError::TokenExpired | TokenError::InvalidToken => HttpResponse::Unauthorized()
            .json(MessageResponse::fail("You are not logged in")),
        TokenError::SigningFailed | TokenError::KeyLoadError { .. } => {
            error!("token error: {}", err);
            HttpResponse::BadGateway().json(MessageResponse::error("Something bad happened"))
        }
    }
}
