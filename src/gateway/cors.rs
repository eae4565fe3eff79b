//! CORS headers for the single public endpoint.
//!
//! The required set combines a wildcard origin with allowed credentials, a
//! combination `tower_http::cors::CorsLayer` refuses to build, so the
//! headers are written literally onto every response instead.

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

pub const ALLOWED_METHODS: &str = "OPTIONS,POST";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";

/// Append the CORS header set to every response, success or failure.
pub async fn apply(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}
