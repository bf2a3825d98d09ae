//! CORS overlay middleware
//!
//! Every response the relay returns, whether synthesized locally or
//! forwarded from Stripe, is stamped with wildcard allow-origin and
//! expose-headers. Existing values are overwritten, not merged, so an
//! upstream CORS policy can never narrow what the relay grants.

use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS},
        HeaderValue,
    },
    response::Response,
};

const WILDCARD: HeaderValue = HeaderValue::from_static("*");

/// Overlay wildcard CORS headers onto a response
pub async fn cors_overlay(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
    headers.insert(ACCESS_CONTROL_EXPOSE_HEADERS, WILDCARD);
    response
}
