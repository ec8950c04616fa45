use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::error_handler::handle_domain_error;

use ottb_core::repositories::UserRepository;
use ottb_core::services::mailer::Mailer;
use ottb_shared::MessageResponse;

use super::AppState;

const VERIFIED_PAGE: &str = r#"
<html>
<head>
    <title>OTTB Email Verification</title>
</head>
<body style="font-family: Arial, sans-serif; background-color: #f0f0f0; padding: 20px;">
    <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff; border-radius: 5px; padding: 20px; box-shadow: 0px 2px 5px 0px rgba(0,0,0,0.1);">
        <h1 style="color: #333333; text-align: center;">OTTB Email Verified Successfully</h1>
        <p style="color: #666666; text-align: center;">Your email has been successfully verified.</p>
    </div>
</body>
</html>
"#;

/// Handler for GET /api/auth/verifyemail/{user_id}
///
/// Marks the account's email verified and renders a confirmation page.
/// The link is opened in a browser, so the success response is HTML
/// rather than JSON. Verification is idempotent.
///
/// # Responses
/// - 200 OK: HTML confirmation page
/// - 400 Bad Request: unknown or malformed account ID
pub async fn verify_email<U, M>(
    state: web::Data<AppState<U, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
{
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(MessageResponse::fail("Invalid user ID"));
        }
    };

    match state.auth_service.verify_email(user_id).await {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(VERIFIED_PAGE),
        Err(error) => handle_domain_error(error),
    }
}
