use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use ottb_api::middleware::{create_cors, JwtAuth};
use ottb_api::routes::{self, AppState};
use ottb_api::session::SessionCookies;
use ottb_core::services::auth::{AuthService, AuthServiceConfig};
use ottb_core::services::token::{KeyPair, TokenCodec, TokenCodecConfig};
use ottb_infra::{DatabasePool, PostgresUserRepository, SmtpMailer};
use ottb_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("configuration error: {e}");
        std::process::exit(1);
    });

    info!("Starting OTTB API server");

    let pool = DatabasePool::new(&config.database)
        .await
        .unwrap_or_else(|e| {
            eprintln!("database error: {e}");
            std::process::exit(1);
        });

    let access_keys = KeyPair::from_base64_pem(
        &config.token.access_private_key,
        &config.token.access_public_key,
    )
    .unwrap_or_else(|e| {
        eprintln!("access key error: {e}");
        std::process::exit(1);
    });
    let refresh_keys = KeyPair::from_base64_pem(
        &config.token.refresh_private_key,
        &config.token.refresh_public_key,
    )
    .unwrap_or_else(|e| {
        eprintln!("refresh key error: {e}");
        std::process::exit(1);
    });

    let token_codec = Arc::new(TokenCodec::new(
        access_keys,
        refresh_keys,
        TokenCodecConfig {
            access_ttl_minutes: config.token.access_ttl_minutes,
            refresh_ttl_minutes: config.token.refresh_ttl_minutes,
        },
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pool.get_pool().clone()));
    let mailer = Arc::new(SmtpMailer::new(&config.smtp).unwrap_or_else(|e| {
        eprintln!("smtp error: {e}");
        std::process::exit(1);
    }));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        mailer,
        token_codec.clone(),
        AuthServiceConfig {
            server_origin: config.server.server_origin.clone(),
        },
    ));

    let session = SessionCookies::from_config(&config.server, &config.token);

    let state = web::Data::new(AppState {
        auth_service,
        session,
    });

    let bind_address = config.server.bind_address();
    let client_origin = config.server.client_origin.clone();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors(&client_origin))
            .app_data(state.clone())
            .configure(|cfg| {
                routes::configure::<PostgresUserRepository, SmtpMailer>(
                    cfg,
                    JwtAuth::new(token_codec.clone()),
                )
            })
    })
    .bind(&bind_address)?
    .run()
    .await
}
