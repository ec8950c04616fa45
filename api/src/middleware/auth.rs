//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware accepts an access token from either the
//! `Authorization: Bearer` header or the `access_token` cookie,
//! verifies it with the shared token codec, and injects the caller's
//! identity into request extensions for handlers to extract.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ErrorUnauthorized;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use ottb_core::services::token::TokenCodec;
use ottb_shared::MessageResponse;

use crate::session::ACCESS_COOKIE;

/// Caller identity injected into authenticated requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// Account ID from the verified access token
    pub user_id: Uuid,
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_codec: Arc<TokenCodec>,
}

impl JwtAuth {
    pub fn new(token_codec: Arc<TokenCodec>) -> Self {
        Self { token_codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_codec: self.token_codec.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_codec: Arc<TokenCodec>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_codec = self.token_codec.clone();

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => return Ok(unauthorized(req)),
            };

            let claims = match token_codec.verify_access(&token) {
                Ok(claims) => claims,
                Err(_) => return Ok(unauthorized(req)),
            };

            let user_id = match claims.user_id() {
                Ok(id) => id,
                Err(_) => return Ok(unauthorized(req)),
            };

            req.extensions_mut().insert(AuthContext { user_id });

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn unauthorized<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized()
        .json(MessageResponse::fail("You are not logged in"))
        .map_into_right_body();
    req.into_response(response)
}

/// Pulls the access token from the Authorization header, falling back
/// to the session cookie
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(header_value) = req.headers().get(AUTHORIZATION) {
        if let Some(token) = header_value.to_str().ok()?.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }
    req.cookie(ACCESS_COOKIE).map(|c| c.value().to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
