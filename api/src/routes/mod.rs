//! Route handlers and registration

pub mod auth;
pub mod health;
pub mod users;

use actix_web::web;

use ottb_core::repositories::UserRepository;
use ottb_core::services::mailer::Mailer;

pub use auth::AppState;

use crate::middleware::JwtAuth;

/// Registers every route under `/api`
pub fn configure<U, M>(cfg: &mut web::ServiceConfig, jwt: JwtAuth)
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
{
    cfg.service(
        web::scope("/api")
            .route("/healthchecker", web::get().to(health::health_checker))
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup::sign_up::<U, M>))
                    .route(
                        "/verifyemail/{user_id}",
                        web::get().to(auth::verify_email::verify_email::<U, M>),
                    )
                    .route("/signin", web::post().to(auth::signin::sign_in::<U, M>))
                    .route("/refresh", web::get().to(auth::refresh::refresh::<U, M>))
                    .route("/logout", web::post().to(auth::logout::logout::<U, M>)),
            )
            .service(
                web::scope("/users")
                    .wrap(jwt)
                    .route("/me", web::get().to(users::get_me::<U, M>)),
            ),
    );
}
