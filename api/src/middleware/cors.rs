//! CORS middleware configuration for cross-origin requests.
//!
//! The frontend lives on its own origin and talks to this API with
//! cookies attached, so credentials support is mandatory and the
//! allowed origin has to be explicit rather than a wildcard.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates a CORS middleware instance for the configured client origin
pub fn create_cors(client_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(client_origin)
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        // Cookies cross the origin boundary on every authenticated call
        .supports_credentials()
        .max_age(3600)
}
