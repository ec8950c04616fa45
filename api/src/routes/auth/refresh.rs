use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth_dto::TokenResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::session::REFRESH_COOKIE;

use ottb_core::repositories::UserRepository;
use ottb_core::services::mailer::Mailer;
use ottb_shared::MessageResponse;

use super::AppState;

/// Handler for GET /api/auth/refresh
///
/// Mints a new access token from the `refresh_token` cookie. The
/// refresh cookie itself is left in place; only the access and
/// logged_in cookies are reissued.
///
/// # Responses
/// - 200 OK: `{status:"success", access_token}` plus refreshed cookies
/// - 403 Forbidden: missing, invalid or expired refresh token
pub async fn refresh<U, M>(req: HttpRequest, state: web::Data<AppState<U, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
{
    let refresh_token = match req.cookie(REFRESH_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            return HttpResponse::Forbidden()
                .json(MessageResponse::fail("could not refresh access token"));
        }
    };

    match state.auth_service.refresh_access_token(&refresh_token).await {
        Ok(access_token) => {
            let [access, logged_in] = state.session.refreshed(&access_token);

            HttpResponse::Ok()
                .cookie(access)
                .cookie(logged_in)
                .json(TokenResponse::new(access_token))
        }
        Err(error) => handle_domain_error(error),
    }
}
