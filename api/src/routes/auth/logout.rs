use actix_web::{web, HttpResponse};

use ottb_core::repositories::UserRepository;
use ottb_core::services::mailer::Mailer;
use ottb_shared::MessageResponse;

use super::AppState;

/// Handler for POST /api/auth/logout
///
/// Clears the three session cookies. Sessions are stateless, so no
/// server-side record is touched; previously issued tokens simply age
/// out.
pub async fn logout<U, M>(state: web::Data<AppState<U, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
{
    let [access, refresh, logged_in] = state.session.cleared();

    HttpResponse::Ok()
        .cookie(access)
        .cookie(refresh)
        .cookie(logged_in)
        .json(MessageResponse::success())
}
