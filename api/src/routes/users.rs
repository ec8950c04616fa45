//! User route handlers

use actix_web::{web, HttpResponse};

use crate::dto::auth_dto::user_envelope;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::AuthContext;

use ottb_core::repositories::UserRepository;
use ottb_core::services::mailer::Mailer;

use super::AppState;

/// Handler for GET /api/users/me
///
/// Returns the authenticated account. The JWT middleware has already
/// verified the token and injected the caller's identity.
pub async fn get_me<U, M>(auth: AuthContext, state: web::Data<AppState<U, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
{
    match state.auth_service.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(user_envelope(user)),
        Err(error) => handle_domain_error(error),
    }
}
