//! Health check endpoint

use actix_web::HttpResponse;

use ottb_shared::MessageResponse;

/// Handler for GET /api/healthchecker
pub async fn health_checker() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::success_with("OTTB API is running"))
}
