use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{SignInRequest, TokenResponse};
use crate::handlers::error_handler::handle_domain_error;

use ottb_core::repositories::UserRepository;
use ottb_core::services::mailer::Mailer;
use ottb_shared::MessageResponse;

use super::AppState;

/// Handler for POST /api/auth/signin
///
/// Authenticates with username and password, sets the three session
/// cookies and returns the access token in the body.
///
/// # Responses
/// - 200 OK: `{status:"success", access_token}` plus cookies
/// - 400 Bad Request: validation failure or wrong credentials
pub async fn sign_in<U, M>(
    state: web::Data<AppState<U, M>>,
    request: web::Json<SignInRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.0.validate() {
        return HttpResponse::BadRequest().json(MessageResponse::fail(errors.to_string()));
    }

    match state
        .auth_service
        .sign_in(&request.username, &request.password)
        .await
    {
        Ok(tokens) => {
            let [access, refresh, logged_in] = state
                .session
                .signed_in(&tokens.access_token, &tokens.refresh_token);

            HttpResponse::Ok()
                .cookie(access)
                .cookie(refresh)
                .cookie(logged_in)
                .json(TokenResponse::new(tokens.access_token))
        }
        Err(error) => handle_domain_error(error),
    }
}
