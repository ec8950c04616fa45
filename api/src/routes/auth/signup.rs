use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{user_envelope, SignUpRequest};
use crate::handlers::error_handler::handle_domain_error;

use ottb_core::repositories::UserRepository;
use ottb_core::services::mailer::Mailer;
use ottb_shared::MessageResponse;

use super::AppState;

/// Handler for POST /api/auth/signup
///
/// Creates an unverified account and sends the verification email.
///
/// # Responses
/// - 201 Created: `{status:"success", data:{user}}`
/// - 400 Bad Request: validation failure or password mismatch
/// - 409 Conflict: username or email already taken
/// - 500 Internal Server Error: verification email could not be sent
pub async fn sign_up<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<SignUpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.0.validate() {
        return HttpResponse::BadRequest().json(MessageResponse::fail(errors.to_string()));
    }

    match state.auth_service.sign_up(request.0.into()).await {
        Ok(user) => HttpResponse::Created().json(user_envelope(user)),
        Err(error) => handle_domain_error(error),
    }
}
