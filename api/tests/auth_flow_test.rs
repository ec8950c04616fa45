//! End-to-end tests of the auth HTTP surface against in-memory
//! infrastructure.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;

use ottb_api::middleware::JwtAuth;
use ottb_api::routes::{self, AppState};
use ottb_api::session::SessionCookies;
use ottb_core::repositories::MockUserRepository;
use ottb_core::services::auth::{AuthService, AuthServiceConfig};
use ottb_core::services::mailer::MockMailer;
use ottb_core::services::token::{KeyPair, TokenCodec, TokenCodecConfig};

const ORIGIN: &str = "http://localhost:8000";

const ACCESS_PRIVATE: &str = include_str!("keys/access_private.pem");
const ACCESS_PUBLIC: &str = include_str!("keys/access_public.pem");
const REFRESH_PRIVATE: &str = include_str!("keys/refresh_private.pem");
const REFRESH_PUBLIC: &str = include_str!("keys/refresh_public.pem");

struct TestEnv {
    state: web::Data<AppState<MockUserRepository, MockMailer>>,
    codec: Arc<TokenCodec>,
    repo: Arc<MockUserRepository>,
    mailer: Arc<MockMailer>,
}

fn test_env() -> TestEnv {
    let access = KeyPair::from_pem(ACCESS_PRIVATE, ACCESS_PUBLIC).unwrap();
    let refresh = KeyPair::from_pem(REFRESH_PRIVATE, REFRESH_PUBLIC).unwrap();
    let codec = Arc::new(TokenCodec::new(
        access,
        refresh,
        TokenCodecConfig::default(),
    ));

    let repo = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());

    let auth_service = Arc::new(AuthService::new(
        repo.clone(),
        mailer.clone(),
        codec.clone(),
        AuthServiceConfig {
            server_origin: ORIGIN.to_string(),
        },
    ));

    let state = web::Data::new(AppState {
        auth_service,
        session: SessionCookies {
            domain: "localhost".to_string(),
            secure: false,
            access_max_age_secs: 15 * 60,
            refresh_max_age_secs: 60 * 60,
        },
    });

    TestEnv {
        state,
        codec,
        repo,
        mailer,
    }
}

macro_rules! test_app {
    ($env:expr) => {
        test::init_service(
            App::new().app_data($env.state.clone()).configure(|cfg| {
                routes::configure::<MockUserRepository, MockMailer>(
                    cfg,
                    JwtAuth::new($env.codec.clone()),
                )
            }),
        )
        .await
    };
}

fn signup_body(username: &str, email: &str) -> serde_json::Value {
    json!({
        "name": "Ann Example",
        "username": username,
        "email": email,
        "password": "hunter22!",
        "passwordConfirm": "hunter22!",
    })
}

#[actix_web::test]
async fn test_full_signup_verify_signin_refresh_logout_flow() {
    let env = test_env();
    let app = test_app!(env);

    // Signup
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("ann01", "ann@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user"]["username"], "ann01");
    assert_eq!(body["data"]["user"]["verified"], false);
    assert!(body["data"]["user"].get("password").is_none());

    let user_id = body["data"]["user"]["id"].as_str().unwrap().to_string();

    // The verification email carries the link for this user
    let sent = env.mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0]
        .html_body
        .contains(&format!("{ORIGIN}/api/auth/verifyemail/{user_id}")));

    // Verify email
    let req = test::TestRequest::get()
        .uri(&format!("/api/auth/verifyemail/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    // Sign in
    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .set_json(json!({"username": "Ann01", "password": "hunter22!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookies: Vec<Cookie<'static>> = resp
        .response()
        .cookies()
        .map(|c| c.into_owned())
        .collect();
    let names: Vec<&str> = cookies.iter().map(|c| c.name()).collect();
    assert!(names.contains(&"access_token"));
    assert!(names.contains(&"refresh_token"));
    assert!(names.contains(&"logged_in"));

    let access_cookie = cookies
        .iter()
        .find(|c| c.name() == "access_token")
        .unwrap()
        .clone();
    let refresh_cookie = cookies
        .iter()
        .find(|c| c.name() == "refresh_token")
        .unwrap()
        .clone();

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    let access_token = body["access_token"].as_str().unwrap().to_string();
    assert_eq!(access_cookie.value(), access_token);

    // Current user via Bearer header
    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header(("Authorization", format!("Bearer {access_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["email"], "ann@x.com");
    assert_eq!(body["data"]["user"]["verified"], true);

    // Current user via session cookie
    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .cookie(access_cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Refresh
    let req = test::TestRequest::get()
        .uri("/api/auth/refresh")
        .cookie(refresh_cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let refreshed: Vec<String> = resp
        .response()
        .cookies()
        .map(|c| c.name().to_string())
        .collect();
    assert!(refreshed.contains(&"access_token".to_string()));
    assert!(refreshed.contains(&"logged_in".to_string()));
    // The refresh token is not rotated
    assert!(!refreshed.contains(&"refresh_token".to_string()));

    let body: serde_json::Value = test::read_body_json(resp).await;
    let new_access = body["access_token"].as_str().unwrap();
    let claims = env.codec.verify_access(new_access).unwrap();
    assert_eq!(claims.user_id().unwrap().to_string(), user_id);

    // Logout
    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    for cookie in resp.response().cookies() {
        assert_eq!(cookie.value(), "");
    }
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "success"}));
}

#[actix_web::test]
async fn test_signup_duplicate_returns_conflict() {
    let env = test_env();
    let app = test_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("ann01", "ann@x.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("ann01", "other@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "User with that email or username already exists"
    );
}

#[actix_web::test]
async fn test_signup_password_mismatch_is_bad_request() {
    let env = test_env();
    let app = test_app!(env);

    let mut body = signup_body("ann01", "ann@x.com");
    body["passwordConfirm"] = json!("different-password");

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_signup_email_failure_rolls_back() {
    let env = test_env();
    let app = test_app!(env);
    env.mailer.simulate_failure();

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("ann01", "ann@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Failed to send email.");

    assert_eq!(env.repo.count().await, 0);
}

#[actix_web::test]
async fn test_signin_wrong_password_is_bad_request() {
    let env = test_env();
    let app = test_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("ann01", "ann@x.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .set_json(json!({"username": "ann01", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid username or Password");
}

#[actix_web::test]
async fn test_refresh_without_cookie_is_forbidden() {
    let env = test_env();
    let app = test_app!(env);

    let req = test::TestRequest::get().uri("/api/auth/refresh").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "could not refresh access token");
}

#[actix_web::test]
async fn test_refresh_with_access_token_is_forbidden() {
    let env = test_env();
    let app = test_app!(env);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("ann01", "ann@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let user_id = body["data"]["user"]["id"].as_str().unwrap();
    let access = env
        .codec
        .issue_access(user_id.parse().unwrap())
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/auth/refresh")
        .cookie(Cookie::new("refresh_token", access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_me_without_token_is_unauthorized() {
    let env = test_env();
    let app = test_app!(env);

    let req = test::TestRequest::get().uri("/api/users/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "fail");
}

#[actix_web::test]
async fn test_me_with_garbage_token_is_unauthorized() {
    let env = test_env();
    let app = test_app!(env);

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_verify_email_bad_id_is_bad_request() {
    let env = test_env();
    let app = test_app!(env);

    let req = test::TestRequest::get()
        .uri("/api/auth/verifyemail/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/auth/verifyemail/00000000-0000-0000-0000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid user ID");
}

#[actix_web::test]
async fn test_healthchecker() {
    let env = test_env();
    let app = test_app!(env);

    let req = test::TestRequest::get().uri("/api/healthchecker").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
}
